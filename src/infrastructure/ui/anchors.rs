use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::domain::logging::LogComponent;
use crate::domain::navigation::{CONTACT_PAGE, CONTACT_SECTION_ID, anchor_scroll_top, anchor_target};
use crate::infrastructure::dom;
use crate::log_warn;

fn header_height() -> Option<f64> {
    dom::query("header")
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
}

/// Every `a[href^="#"]` scrolls smoothly to its target, clear of the fixed header.
pub struct AnchorScrollBinding {
    _clicks: Vec<EventListener>,
}

impl AnchorScrollBinding {
    pub fn attach() -> Option<Self> {
        let links = dom::query_all("a[href^=\"#\"]");
        if links.is_empty() {
            return None;
        }

        let clicks = links
            .into_iter()
            .map(|link| {
                let href = link.get_attribute("href").unwrap_or_default();
                EventListener::new_with_options(
                    &link,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let target = anchor_target(&href)
                            .and_then(dom::query)
                            .and_then(|target| target.dyn_into::<HtmlElement>().ok());
                        if let Some(target) = target {
                            dom::smooth_scroll_to(anchor_scroll_top(target.offset_top() as f64, header_height()));
                        }
                    },
                )
            })
            .collect();

        Some(Self { _clicks: clicks })
    }
}

/// `.cta-button`: scroll to `#contact`, or open the contact page where there is none.
pub struct CtaBinding {
    _clicks: Vec<EventListener>,
}

impl CtaBinding {
    pub fn attach() -> Option<Self> {
        let buttons = dom::query_all(".cta-button");
        if buttons.is_empty() {
            return None;
        }

        let clicks = buttons
            .iter()
            .map(|button| {
                EventListener::new(button, "click", |_| match dom::element_by_id(CONTACT_SECTION_ID) {
                    Some(contact) => dom::smooth_scroll_into_view(&contact),
                    None => {
                        if let Err(e) = dom::navigate(CONTACT_PAGE) {
                            log_warn!(LogComponent::Navigation, "{}", e);
                        }
                    }
                })
            })
            .collect();

        Some(Self { _clicks: clicks })
    }
}
