//! Page-level overlays: the loading screen and the login modal.

/// The loading screen fades out this long after the module starts.
pub const LOADING_HIDE_MS: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    LoginClicked,
    CloseClicked,
    /// A window click; `on_backdrop` when the target is the modal element itself.
    WindowClicked { on_backdrop: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChange {
    Opened,
    Closed,
    Unchanged,
}

/// Login dialog. While open the page behind it does not scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginModal {
    open: bool,
}

impl LoginModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: ModalEvent) -> ModalChange {
        match event {
            ModalEvent::LoginClicked if !self.open => {
                self.open = true;
                ModalChange::Opened
            }
            ModalEvent::CloseClicked | ModalEvent::WindowClicked { on_backdrop: true } if self.open => {
                self.open = false;
                ModalChange::Closed
            }
            _ => ModalChange::Unchanged,
        }
    }

    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
