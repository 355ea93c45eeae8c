use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::domain::logging::LogComponent;
use crate::domain::overlays::{LoginModal, ModalChange, ModalEvent};
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_delay};
use crate::log_debug;

const HIDDEN: &str = "hidden";
const ACTIVE: &str = "active";

/// The `#loading` screen, hidden once its delay elapses.
pub struct LoadingOverlay {
    task: TaskHandle,
}

impl LoadingOverlay {
    pub fn schedule(hide_after_ms: u32) -> Option<Self> {
        let overlay = dom::first_of(&["#loading", ".loading"])?;
        let task = spawn_delay(hide_after_ms, move || {
            dom::set_class(&overlay, HIDDEN, true);
            log_debug!(LogComponent::Overlays, "loading screen hidden");
        });
        Some(Self { task })
    }

    pub fn cancel(&self) {
        self.task.cancel();
    }
}

fn reflect(dialog: &Element, modal: &RefCell<LoginModal>, event: ModalEvent) {
    let mut modal = modal.borrow_mut();
    if modal.handle(event) == ModalChange::Unchanged {
        return;
    }
    dom::set_class(dialog, ACTIVE, modal.is_open());
    if let Some(body) = dom::document().ok().and_then(|doc| doc.body()) {
        dom::set_style(&body, "overflow", modal.body_overflow());
    }
}

/// `#login-modal` opened by `.login-btn`, closed by `.modal-close` or a backdrop click.
pub struct LoginModalBinding {
    dialog: Element,
    modal: Rc<RefCell<LoginModal>>,
    listeners: Vec<EventListener>,
}

impl LoginModalBinding {
    pub fn attach() -> Option<Self> {
        let dialog = dom::element_by_id("login-modal")?;
        let modal = Rc::new(RefCell::new(LoginModal::default()));
        let mut listeners = Vec::new();

        if let Some(login) = dom::query(".login-btn") {
            let (dialog, modal) = (dialog.clone(), Rc::clone(&modal));
            listeners.push(EventListener::new_with_options(
                &login,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    reflect(&dialog, &modal, ModalEvent::LoginClicked);
                },
            ));
        }

        if let Some(close) = dom::query(".modal-close") {
            let (dialog, modal) = (dialog.clone(), Rc::clone(&modal));
            listeners.push(EventListener::new(&close, "click", move |_| {
                reflect(&dialog, &modal, ModalEvent::CloseClicked);
            }));
        }

        if let Ok(window) = dom::window() {
            let (dialog, modal) = (dialog.clone(), Rc::clone(&modal));
            listeners.push(EventListener::new(&window, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|target| target == dialog);
                reflect(&dialog, &modal, ModalEvent::WindowClicked { on_backdrop });
            }));
        }

        Some(Self { dialog, modal, listeners })
    }

    pub fn is_open(&self) -> bool {
        self.modal.borrow().is_open()
    }

    /// Drops the listeners and unlocks page scrolling if the dialog was left open.
    pub fn detach(self) {
        drop(self.listeners);
        if self.modal.borrow().is_open() {
            reflect(&self.dialog, &self.modal, ModalEvent::CloseClicked);
        }
    }
}
