use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement};

use crate::domain::forms::{ContactForm, NEWSLETTER_THANKS, SENDING_LABEL, validate_newsletter_email};
use crate::domain::logging::LogComponent;
use crate::domain::notifications::Severity;
use crate::infrastructure::dom;
use crate::infrastructure::timers::{TaskHandle, spawn_delay};
use crate::infrastructure::ui::notifications::NotificationCenter;
use crate::{log_debug, log_info};

/// `value` of an `<input>` or `<select>`; anything else reads as empty.
fn control_value(element: Option<Element>) -> String {
    let Some(element) = element else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    js_sys::Reflect::get(&element, &"value".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

fn read_contact_form() -> ContactForm {
    ContactForm {
        name: control_value(dom::element_by_id("name")),
        email: control_value(dom::element_by_id("email")),
        interest: control_value(dom::element_by_id("interest")),
    }
}

/// Simulated submission of the `#contactForm` inquiry.
pub struct ContactFormBinding {
    _submit: EventListener,
    pending: Rc<RefCell<Option<TaskHandle>>>,
}

impl ContactFormBinding {
    pub fn attach(notifications: Rc<NotificationCenter>, send_delay_ms: u32) -> Option<Self> {
        let form = dom::element_by_id("contactForm")?.dyn_into::<HtmlFormElement>().ok()?;
        let pending: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));

        let submit_form = form.clone();
        let submit_pending = Rc::clone(&pending);
        let submit = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if submit_pending.borrow().is_some() {
                    return;
                }

                let inquiry = match read_contact_form().validate() {
                    Ok(inquiry) => inquiry,
                    Err(e) => {
                        log_debug!(LogComponent::Forms, "contact form rejected: {}", e);
                        notifications.notify(e.user_message(), Severity::Error);
                        return;
                    }
                };

                let button = dom::query_within(&submit_form, "button[type=\"submit\"]")
                    .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
                let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
                if let Some(button) = &button {
                    button.set_inner_html(SENDING_LABEL);
                    button.set_disabled(true);
                }

                let form = submit_form.clone();
                let notifications = Rc::clone(&notifications);
                let pending = Rc::clone(&submit_pending);
                let task = spawn_delay(send_delay_ms, move || {
                    log_info!(LogComponent::Forms, "inquiry about {} sent", inquiry.interest);
                    notifications.notify(&inquiry.confirmation(), Severity::Success);
                    form.reset();
                    if let Some(button) = &button {
                        button.set_inner_html(&original_label);
                        button.set_disabled(false);
                    }
                    pending.borrow_mut().take();
                });
                *submit_pending.borrow_mut() = Some(task);
            },
        );

        Some(Self { _submit: submit, pending })
    }

    /// Drops the listener and any submission still in flight.
    pub fn detach(self) {
        self.pending.borrow_mut().take();
    }
}

/// Every `.newsletter-form` on the page.
pub struct NewsletterBinding {
    _submits: Vec<EventListener>,
}

impl NewsletterBinding {
    pub fn attach(notifications: Rc<NotificationCenter>) -> Option<Self> {
        let forms = dom::query_all(".newsletter-form");
        if forms.is_empty() {
            return None;
        }

        let submits = forms
            .into_iter()
            .map(|form| {
                let notifications = Rc::clone(&notifications);
                let input = dom::query_within(&form, "input[type=\"email\"]")
                    .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
                EventListener::new_with_options(
                    &form,
                    "submit",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let raw = input.as_ref().map(HtmlInputElement::value).unwrap_or_default();
                        match validate_newsletter_email(&raw) {
                            Ok(_) => {
                                if let Some(input) = &input {
                                    input.set_value("");
                                }
                                notifications.notify(NEWSLETTER_THANKS, Severity::Success);
                            }
                            Err(e) => {
                                notifications.notify(e.user_message(), Severity::Error);
                            }
                        }
                    },
                )
            })
            .collect();

        Some(Self { _submits: submits })
    }
}
