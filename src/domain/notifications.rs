use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    #[display(fmt = "info")]
    Info,
    #[display(fmt = "success")]
    Success,
    #[display(fmt = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "notification-{}", _0)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: u64,
}

impl Notification {
    /// `notification success` etc.
    pub fn css_class(&self) -> String {
        format!("notification {}", self.severity.as_ref())
    }
}

/// Live notifications in creation order. Nothing is queued, throttled or de-duplicated:
/// concurrent notifications simply stack.
#[derive(Debug, Clone)]
pub struct NotificationBoard {
    next_id: u64,
    lifetime_ms: u64,
    active: Vec<Notification>,
    styles_injected: bool,
}

impl Default for NotificationBoard {
    fn default() -> Self {
        Self::new(NOTIFICATION_LIFETIME_MS)
    }
}

impl NotificationBoard {
    pub fn new(lifetime_ms: u32) -> Self {
        Self { next_id: 0, lifetime_ms: lifetime_ms as u64, active: Vec::new(), styles_injected: false }
    }

    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    pub fn push(&mut self, message: &str, severity: Severity, now: u64) -> Notification {
        self.next_id += 1;
        let notification = Notification {
            id: NotificationId(self.next_id),
            message: message.to_string(),
            severity,
            created_at: now,
        };
        self.active.push(notification.clone());
        notification
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.active.iter().any(|n| n.id == id)
    }

    pub fn deadline(&self, id: NotificationId) -> Option<u64> {
        self.active.iter().find(|n| n.id == id).map(|n| n.created_at + self.lifetime_ms)
    }

    /// A second removal of the same notification returns `None`.
    fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.active.iter().position(|n| n.id == id)?;
        Some(self.active.remove(index))
    }

    /// Closed by the visitor before its timer ran out.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        self.remove(id)
    }

    /// Lifetime elapsed. A no-op for notifications already dismissed.
    pub fn expire(&mut self, id: NotificationId) -> Option<Notification> {
        self.remove(id)
    }

    /// `true` only the first time; the stylesheet goes into `<head>` once per page.
    pub fn claim_style_injection(&mut self) -> bool {
        !std::mem::replace(&mut self.styles_injected, true)
    }

    pub fn clear(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.active)
    }
}
