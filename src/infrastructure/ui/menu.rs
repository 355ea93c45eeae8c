use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::domain::logging::LogComponent;
use crate::domain::navigation::{MenuChange, MenuEvent, MobileMenu};
use crate::infrastructure::dom;
use crate::infrastructure::timers::Debouncer;
use crate::log_debug;

const ACTIVE: &str = "active";
const BODY_MENU_OPEN: &str = "menu-open";

struct MenuElements {
    hamburger: Element,
    nav_links: Option<Element>,
    overlay: Option<Element>,
    cta: Option<HtmlElement>,
}

/// Hamburger overlay bound to the header markup.
pub struct MenuBinding {
    menu: RefCell<MobileMenu>,
    elements: MenuElements,
    listeners: RefCell<Vec<EventListener>>,
    resize: RefCell<Option<EventListener>>,
    debouncer: Debouncer,
}

impl MenuBinding {
    /// `None` when the page has no hamburger button.
    pub fn attach(resize_debounce_ms: u32) -> Option<Rc<Self>> {
        let hamburger = dom::first_of(&["#hamburger", "#mobileToggle"])?;
        let elements = MenuElements {
            hamburger,
            nav_links: dom::first_of(&[".nav-links", "#navLinks"]),
            overlay: dom::element_by_id("mobileMenuOverlay"),
            cta: dom::query("nav .cta-button").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        };

        let binding = Rc::new(Self {
            menu: RefCell::new(MobileMenu::default()),
            elements,
            listeners: RefCell::new(Vec::new()),
            resize: RefCell::new(None),
            debouncer: Debouncer::new(),
        });
        binding.listen(resize_debounce_ms);
        log_debug!(LogComponent::Menu, "mobile menu attached");
        Some(binding)
    }

    fn listen(self: &Rc<Self>, resize_debounce_ms: u32) {
        let mut listeners = Vec::new();

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.elements.hamburger, "click", move |event| {
            event.stop_propagation();
            dispatch(&this, MenuEvent::HamburgerClicked);
        }));

        if let Some(overlay) = &self.elements.overlay {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(overlay, "click", move |_| {
                dispatch(&this, MenuEvent::OverlayClicked);
            }));
        }

        if let Some(nav_links) = &self.elements.nav_links {
            if let Ok(links) = nav_links.query_selector_all("a") {
                for link in (0..links.length()).filter_map(|i| links.item(i)) {
                    let this = Rc::downgrade(self);
                    listeners.push(EventListener::new(&link, "click", move |_| {
                        dispatch(&this, MenuEvent::NavLinkClicked);
                    }));
                }
            }
        }

        if let Ok(document) = dom::document() {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(&document, "keydown", move |event| {
                let is_escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape");
                if is_escape {
                    dispatch(&this, MenuEvent::EscapePressed);
                }
            }));
        }

        *self.listeners.borrow_mut() = listeners;

        let this = Rc::downgrade(self);
        let resize = dom::on_window("resize", move |_| {
            let Some(binding) = this.upgrade() else {
                return;
            };
            let settled = Rc::downgrade(&binding);
            binding.debouncer.trigger(resize_debounce_ms, move || {
                dispatch(&settled, MenuEvent::Resized { width: dom::viewport_width() });
            });
        });
        *self.resize.borrow_mut() = resize;
    }

    pub fn is_open(&self) -> bool {
        self.menu.borrow().is_open()
    }

    pub fn handle(&self, event: MenuEvent) -> MenuChange {
        let change = self.menu.borrow_mut().handle(event);
        if change != MenuChange::Unchanged {
            log_debug!(LogComponent::Menu, "{:?} -> {:?}", event, change);
            self.reflect();
        }
        change
    }

    fn reflect(&self) {
        let menu = *self.menu.borrow();
        let open = menu.is_open();

        dom::set_class(&self.elements.hamburger, ACTIVE, open);
        if let Some(nav_links) = &self.elements.nav_links {
            dom::set_class(nav_links, ACTIVE, open);
        }
        if let Some(overlay) = &self.elements.overlay {
            dom::set_class(overlay, ACTIVE, open);
        }
        if let Some(body) = dom::document().ok().and_then(|doc| doc.body()) {
            dom::set_class(&body, BODY_MENU_OPEN, open);
        }
        if let Some(cta) = &self.elements.cta {
            let style = cta.style();
            if menu.cta_visible(dom::viewport_width()) {
                let _ = style.remove_property("display");
            } else {
                let _ = style.set_property("display", "none");
            }
        }
    }

    pub fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.resize.borrow_mut().take();
        self.debouncer.cancel();
    }
}

fn dispatch(binding: &Weak<MenuBinding>, event: MenuEvent) {
    if let Some(binding) = binding.upgrade() {
        binding.handle(event);
    }
}
