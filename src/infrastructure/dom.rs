//! Thin helpers over `web_sys` lookups. Lookups return `Option`: an absent
//! anchor means the widget is not on this page.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::application::config::FeatureSet;
use crate::domain::errors::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok().flatten()
}

pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().ok().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching any of `selectors`, in order.
pub fn first_of(selectors: &[&str]) -> Option<Element> {
    selectors.iter().find_map(|selector| query(selector))
}

pub fn create_element(document: &Document, tag: &str) -> Result<Element, DomError> {
    document
        .create_element(tag)
        .map_err(|e| DomError::ElementCreationFailed(format!("<{}>: {:?}", tag, e)))
}

pub fn create_html_element(document: &Document, tag: &str) -> Result<HtmlElement, DomError> {
    create_element(document, tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::UnexpectedElementType { selector: tag.to_string(), expected: "HtmlElement" })
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_attr(element: &Element, name: &str, value: &str) -> Result<(), DomError> {
    element
        .set_attribute(name, value)
        .map_err(|e| DomError::JsCallFailed(format!("setAttribute({}): {:?}", name, e)))
}

pub fn scroll_offset() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window().ok().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window().ok().and_then(|w| w.inner_height().ok()).and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Passive `window` listener for scroll and resize. Removed when dropped.
pub fn on_window(event: &'static str, callback: impl FnMut(&web_sys::Event) + 'static) -> Option<EventListener> {
    let window = window().ok()?;
    let options = EventListenerOptions { passive: true, ..EventListenerOptions::default() };
    Some(EventListener::new_with_options(&window, event, options, callback))
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn smooth_scroll_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn navigate(href: &str) -> Result<(), DomError> {
    window()?
        .location()
        .set_href(href)
        .map_err(|e| DomError::JsCallFailed(format!("location.href = {}: {:?}", href, e)))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Feature flags inferred from which anchors the current page carries.
pub fn detect_features() -> FeatureSet {
    let present = |selector: &str| query(selector).is_some();
    FeatureSet {
        hero_counters: present(".hero-stats"),
        statistics_counters: present(".statistics"),
        ticker: present("#forexTicker"),
        chart: present("#liveChart"),
        starfield: present("#space-container"),
        section_nav: present(".nav-dot"),
        mobile_menu: present("#hamburger") || present("#mobileToggle"),
        header_scroll: present("header"),
        reveal_cards: present(".feature-card, .service-card, .value-card, .team-member"),
        contact_form: present("#contactForm"),
        newsletter: present(".newsletter-form"),
        loading_overlay: present("#loading, .loading"),
        anchor_scroll: present("a[href^=\"#\"]"),
        cta_contact: present(".cta-button"),
        login_modal: present("#login-modal"),
        timeframe_tabs: present(".timeframe"),
        blog_filters: present(".blog-content"),
        event_filters: present(".events-content"),
    }
}
