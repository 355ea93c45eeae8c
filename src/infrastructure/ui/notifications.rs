use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use leptos::*;

use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::notifications::{Notification, NotificationBoard, NotificationId, Severity};
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_delay};
use crate::{log_debug, log_warn};

const STYLE_MARKER_ID: &str = "notification-styles";
const STACK_ID: &str = "notification-stack";

const NOTIFICATION_CSS: &str = r#"
.notification-stack {
    position: fixed;
    top: 100px;
    right: 30px;
    z-index: 10000;
    display: flex;
    flex-direction: column;
    gap: 10px;
}
.notification {
    padding: 15px 20px;
    border-radius: 10px;
    color: white;
    display: flex;
    align-items: center;
    gap: 15px;
    max-width: 400px;
    background: #1f2a44;
    animation: slideIn 0.3s ease;
}
.notification.success { background: var(--success-green); }
.notification.error { background: var(--warning-orange); }
.notification button {
    background: none;
    border: none;
    color: white;
    font-size: 20px;
    cursor: pointer;
}
@keyframes slideIn {
    from { transform: translateX(100%); }
    to { transform: translateX(0); }
}
"#;

#[component]
pub fn NotificationStack(
    notifications: RwSignal<Vec<Notification>>,
    on_dismiss: Callback<NotificationId>,
) -> impl IntoView {
    view! {
        <For
            each=move || notifications.get()
            key=|notification| notification.id
            children=move |notification| {
                let id = notification.id;
                let class = notification.css_class();
                view! {
                    <div class=class>
                        <span>{notification.message}</span>
                        <button on:click=move |_| on_dismiss.call(id)>"×"</button>
                    </div>
                }
            }
        />
    }
}

/// Transient messages in the top-right corner.
///
/// Each notification auto-expires after the configured lifetime; clicking its
/// close button drops the pending timer and removes it on the spot.
pub struct NotificationCenter {
    board: RefCell<NotificationBoard>,
    notifications: RwSignal<Vec<Notification>>,
    timers: RefCell<HashMap<NotificationId, TaskHandle>>,
    container: RefCell<Option<web_sys::HtmlElement>>,
    this: Weak<NotificationCenter>,
}

impl NotificationCenter {
    pub fn new(lifetime_ms: u32) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            board: RefCell::new(NotificationBoard::new(lifetime_ms)),
            notifications: create_rw_signal(Vec::new()),
            timers: RefCell::new(HashMap::new()),
            container: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn notify(&self, message: &str, severity: Severity) -> NotificationId {
        if let Err(e) = self.ensure_mounted() {
            log_warn!(LogComponent::Notifications, "stack not mounted: {}", e);
        }

        let now = get_time_provider().current_timestamp();
        let notification = self.board.borrow_mut().push(message, severity, now);
        let id = notification.id;
        self.sync();

        let lifetime = self.board.borrow().lifetime_ms() as u32;
        let this = self.this.clone();
        let timer = spawn_delay(lifetime, move || {
            if let Some(center) = this.upgrade() {
                center.expire(id);
            }
        });
        self.timers.borrow_mut().insert(id, timer);

        log_debug!(LogComponent::Notifications, "{} [{}] {}", id, severity, message);
        id
    }

    /// User dismissal. Returns `false` when the notification is already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.timers.borrow_mut().remove(&id);
        let removed = self.board.borrow_mut().dismiss(id).is_some();
        if removed {
            self.sync();
        }
        removed
    }

    fn expire(&self, id: NotificationId) {
        self.timers.borrow_mut().remove(&id);
        if self.board.borrow_mut().expire(id).is_some() {
            self.sync();
        }
    }

    pub fn active_count(&self) -> usize {
        self.board.borrow().active().len()
    }

    pub fn is_active(&self, id: NotificationId) -> bool {
        self.board.borrow().contains(id)
    }

    fn sync(&self) {
        let active = self.board.borrow().active().to_vec();
        self.notifications.set(active);
    }

    fn ensure_mounted(&self) -> AppResult<()> {
        if self.container.borrow().is_some() {
            return Ok(());
        }
        let document = dom::document()?;

        let first_claim = self.board.borrow_mut().claim_style_injection();
        if first_claim && document.get_element_by_id(STYLE_MARKER_ID).is_none() {
            let style = dom::create_element(&document, "style")?;
            style.set_id(STYLE_MARKER_ID);
            style.set_text_content(Some(NOTIFICATION_CSS));
            if let Some(head) = document.head() {
                let _ = head.append_child(&style);
            }
        }

        let stack = dom::create_html_element(&document, "div")?;
        stack.set_id(STACK_ID);
        stack.set_class_name("notification-stack");
        if let Some(body) = document.body() {
            let _ = body.append_child(&stack);
        }

        let notifications = self.notifications;
        let this = self.this.clone();
        let on_dismiss = Callback::new(move |id: NotificationId| {
            if let Some(center) = this.upgrade() {
                center.dismiss(id);
            }
        });
        mount_to(stack.clone(), move || view! { <NotificationStack notifications=notifications on_dismiss=on_dismiss/> });

        *self.container.borrow_mut() = Some(stack);
        Ok(())
    }

    /// Cancel every pending timer and remove the stack from the page.
    pub fn clear(&self) {
        self.timers.borrow_mut().clear();
        self.board.borrow_mut().clear();
        self.sync();
        if let Some(stack) = self.container.borrow_mut().take() {
            stack.remove();
        }
    }
}
