pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    HamburgerClicked,
    OverlayClicked,
    NavLinkClicked,
    EscapePressed,
    /// Side-navigation click closes an open overlay as a side effect.
    IndicatorClicked,
    /// Fired after the resize debounce settles.
    Resized { width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    Closed,
    Unchanged,
}

/// Open/closed state of the hamburger overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuChange {
        match event {
            MenuEvent::HamburgerClicked => {
                self.open = !self.open;
                if self.open { MenuChange::Opened } else { MenuChange::Closed }
            }
            MenuEvent::Resized { width } if width <= MOBILE_BREAKPOINT_PX => MenuChange::Unchanged,
            MenuEvent::OverlayClicked
            | MenuEvent::NavLinkClicked
            | MenuEvent::EscapePressed
            | MenuEvent::IndicatorClicked
            | MenuEvent::Resized { .. } => self.close(),
        }
    }

    fn close(&mut self) -> MenuChange {
        if !self.open {
            return MenuChange::Unchanged;
        }
        self.open = false;
        MenuChange::Closed
    }

    /// The header CTA hides while the overlay is open on narrow viewports.
    pub fn cta_visible(&self, viewport_width: f64) -> bool {
        !(self.open && viewport_width <= MOBILE_BREAKPOINT_PX)
    }
}
