#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use vip_club_site_wasm::domain::chart::ChartPoint;
use vip_club_site_wasm::domain::counters::{CounterPhase, CounterSuffix, MetricTarget, StartOutcome};
use vip_club_site_wasm::domain::forms::{NEWSLETTER_THANKS, SENDING_LABEL};
use vip_club_site_wasm::domain::notifications::Severity;
use vip_club_site_wasm::infrastructure::dom;
use vip_club_site_wasm::infrastructure::rendering::render_sparkline;
use vip_club_site_wasm::infrastructure::ui::{
    ContactFormBinding, CounterDriver, ListingBinding, LoadingOverlay, LoginModalBinding, MenuBinding,
    NewsletterBinding, NotificationCenter, ScrollBinding, timeframe_tabs,
};
use vip_club_site_wasm::infrastructure::ViewportObserver;

wasm_bindgen_test_configure!(run_in_browser);

fn append(tag: &str, id: &str, class: &str) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    if !id.is_empty() {
        element.set_id(id);
    }
    if !class.is_empty() {
        element.set_class_name(class);
    }
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn append_to(parent: &Element, tag: &str, id: &str) -> Element {
    let element = dom::document().unwrap().create_element(tag).unwrap();
    if !id.is_empty() {
        element.set_id(id);
    }
    parent.append_child(&element).unwrap();
    element
}

fn submit(form: &Element) {
    form.dispatch_event(&Event::new("submit").unwrap()).unwrap();
}

fn set_input(input: &Element, value: &str) {
    input.dyn_ref::<HtmlInputElement>().unwrap().set_value(value);
}

fn notification_text(severity: &str) -> Option<String> {
    dom::query(&format!("#notification-stack .notification.{} span", severity)).and_then(|el| el.text_content())
}

#[wasm_bindgen_test(async)]
async fn counter_driver_writes_final_frame() {
    let element = append("span", "counter-under-test", "");
    element.set_text_content(Some("0"));
    let driver = CounterDriver::new();
    let target = MetricTarget::new("counter-under-test", 10.0, CounterSuffix::None, 100).with_tick(10);

    assert_eq!(driver.animate(target.clone()), Some(StartOutcome::Started));
    assert_eq!(driver.animate(target), Some(StartOutcome::AlreadyAnimated));

    sleep(Duration::from_millis(400)).await;
    assert_eq!(element.text_content().as_deref(), Some("10"));
    assert_eq!(driver.phase("counter-under-test"), Some(CounterPhase::Complete));
    element.remove();
}

#[wasm_bindgen_test]
fn counter_driver_skips_missing_element() {
    let driver = CounterDriver::new();
    let target = MetricTarget::new("does-not-exist", 10.0, CounterSuffix::None, 100);
    assert_eq!(driver.animate(target), None);
}

#[wasm_bindgen_test]
fn notification_center_dismisses_once() {
    let center = NotificationCenter::new(60_000);
    let first = center.notify("Saved", Severity::Success);
    let second = center.notify("Saved", Severity::Success);
    assert_ne!(first, second);
    assert_eq!(center.active_count(), 2);

    let styles = dom::document().unwrap().query_selector_all("#notification-styles").unwrap();
    assert_eq!(styles.length(), 1);
    assert!(dom::element_by_id("notification-stack").is_some());

    assert!(center.dismiss(first));
    assert!(!center.dismiss(first));
    assert!(!center.is_active(first));
    assert!(center.is_active(second));

    center.clear();
    assert_eq!(center.active_count(), 0);
    assert!(dom::element_by_id("notification-stack").is_none());
}

#[wasm_bindgen_test(async)]
async fn notification_expires_after_lifetime() {
    let center = NotificationCenter::new(50);
    let id = center.notify("gone soon", Severity::Info);
    assert!(center.is_active(id));
    sleep(Duration::from_millis(200)).await;
    assert!(!center.is_active(id));
    assert!(!center.dismiss(id));
    center.clear();
}

#[wasm_bindgen_test]
fn sparkline_renders_two_paths() {
    let container = append("div", "chart-under-test", "");
    let points = vec![ChartPoint::new(0.0, 150.0), ChartPoint::new(500.0, 100.0)];
    let _reveal = render_sparkline(&container, &points, 0).unwrap();

    let svg = container.query_selector("svg").unwrap().unwrap();
    assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 500 300"));
    assert_eq!(container.query_selector_all("path").unwrap().length(), 2);
    assert!(container.query_selector("linearGradient#chartGradient").unwrap().is_some());
    container.remove();
}

#[wasm_bindgen_test]
fn menu_binding_toggles_classes() {
    let hamburger = append("button", "hamburger", "");
    let nav_links = append("ul", "", "nav-links");
    let overlay = append("div", "mobileMenuOverlay", "");

    let menu = MenuBinding::attach(250).unwrap();
    hamburger.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(menu.is_open());
    assert!(dom::has_class(&nav_links, "active"));
    assert!(dom::has_class(&overlay, "active"));
    let body = dom::document().unwrap().body().unwrap();
    assert!(dom::has_class(&body, "menu-open"));

    overlay.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!menu.is_open());
    assert!(!dom::has_class(&hamburger, "active"));
    assert!(!dom::has_class(&body, "menu-open"));

    menu.detach();
    hamburger.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!menu.is_open());

    hamburger.remove();
    nav_links.remove();
    overlay.remove();
}

#[wasm_bindgen_test]
fn viewport_observer_tracks_pending_watches() {
    let target = append("div", "", "feature-card");
    let observer = ViewportObserver::new(0.1).unwrap();
    observer.observe(target.clone(), |_| {});
    assert_eq!(observer.pending(), 1);
    observer.disconnect();
    assert_eq!(observer.pending(), 0);
    target.remove();
}

#[wasm_bindgen_test(async)]
async fn contact_form_rejects_then_confirms_after_delay() {
    let form = append("form", "contactForm", "");
    let name = append_to(&form, "input", "name");
    let email = append_to(&form, "input", "email");
    let interest = append_to(&form, "input", "interest");
    let button = append_to(&form, "button", "");
    button.set_attribute("type", "submit").unwrap();
    button.set_inner_html("Send");
    let button: HtmlButtonElement = button.dyn_into().unwrap();

    let center = NotificationCenter::new(60_000);
    let binding = ContactFormBinding::attach(center.clone(), 50).unwrap();

    submit(&form);
    assert_eq!(center.active_count(), 1);
    assert!(notification_text("error").is_some());
    assert!(!button.disabled());

    set_input(&name, "  Ada ");
    set_input(&email, "ada@example.com");
    set_input(&interest, "vip-elite");
    submit(&form);
    assert!(button.disabled());
    assert_eq!(button.inner_html(), SENDING_LABEL);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(
        notification_text("success").as_deref(),
        Some("Thank you Ada! Your inquiry about VIP Elite Program has been received. We'll contact you at ada@example.com within 24 hours.")
    );
    assert!(!button.disabled());
    assert_eq!(button.inner_html(), "Send");
    assert_eq!(name.dyn_ref::<HtmlInputElement>().unwrap().value(), "");

    binding.detach();
    center.clear();
    form.remove();
}

#[wasm_bindgen_test]
fn newsletter_accepts_only_addresses_with_at_sign() {
    let form = append("form", "", "newsletter-form");
    let input = append_to(&form, "input", "");
    input.set_attribute("type", "email").unwrap();

    let center = NotificationCenter::new(60_000);
    let _binding = NewsletterBinding::attach(center.clone()).unwrap();

    set_input(&input, "not-an-address");
    submit(&form);
    assert!(notification_text("error").is_some());
    assert!(notification_text("success").is_none());

    set_input(&input, "club@example.com");
    submit(&form);
    assert_eq!(notification_text("success").as_deref(), Some(NEWSLETTER_THANKS));
    assert_eq!(input.dyn_ref::<HtmlInputElement>().unwrap().value(), "");

    center.clear();
    form.remove();
}

#[wasm_bindgen_test]
fn nav_dot_click_closes_open_menu() {
    let hamburger = append("button", "hamburger", "");
    let section = append("section", "services", "");
    let dot = append("div", "", "nav-dot");
    dot.set_attribute("data-section", "services").unwrap();

    let menu = MenuBinding::attach(250).unwrap();
    let scroll = ScrollBinding::attach(true, false, Some(menu.clone()));
    hamburger.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(menu.is_open());

    dot.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!menu.is_open());

    scroll.detach();
    menu.detach();
    hamburger.remove();
    section.remove();
    dot.remove();
}

#[wasm_bindgen_test(async)]
async fn loading_overlay_hides_after_delay() {
    let overlay = append("div", "loading", "");
    let _loading = LoadingOverlay::schedule(20).unwrap();
    assert!(!dom::has_class(&overlay, "hidden"));
    sleep(Duration::from_millis(100)).await;
    assert!(dom::has_class(&overlay, "hidden"));
    overlay.remove();
}

#[wasm_bindgen_test]
fn login_modal_opens_and_closes_on_backdrop() {
    let dialog = append("div", "login-modal", "");
    let inner = append_to(&dialog, "div", "");
    let login = append("a", "", "login-btn");
    let close = append_to(&dialog, "span", "");
    close.set_class_name("modal-close");
    let body = dom::document().unwrap().body().unwrap();

    let binding = LoginModalBinding::attach().unwrap();
    login.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(binding.is_open());
    assert!(dom::has_class(&dialog, "active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    inner.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(binding.is_open());

    dialog.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!binding.is_open());
    assert!(!dom::has_class(&dialog, "active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    login.dyn_ref::<HtmlElement>().unwrap().click();
    close.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(!binding.is_open());

    binding.detach();
    dialog.remove();
    login.remove();
}

#[wasm_bindgen_test(async)]
async fn event_filter_hides_other_types() {
    let page = append("div", "", "events-content");
    let all = append_to(&page, "button", "");
    all.set_class_name("filter-btn active");
    let webinars = append_to(&page, "button", "");
    webinars.set_class_name("filter-btn");
    webinars.set_attribute("data-filter", "webinar").unwrap();
    let webinar = append_to(&page, "div", "");
    webinar.set_class_name("event-card");
    webinar.set_attribute("data-type", "webinar").unwrap();
    let meetup = append_to(&page, "div", "");
    meetup.set_class_name("event-card");
    meetup.set_attribute("data-type", "meetup").unwrap();

    let listing = ListingBinding::attach_events().unwrap();
    webinars.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(dom::has_class(&webinars, "active"));
    assert!(!dom::has_class(&all, "active"));

    sleep(Duration::from_millis(400)).await;
    let style = |card: &Element| card.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style(&webinar).get_property_value("display").unwrap(), "block");
    assert_eq!(style(&webinar).get_property_value("opacity").unwrap(), "1");
    assert_eq!(style(&meetup).get_property_value("display").unwrap(), "none");

    all.dyn_ref::<HtmlElement>().unwrap().click();
    sleep(Duration::from_millis(100)).await;
    assert_eq!(style(&meetup).get_property_value("display").unwrap(), "block");

    listing.detach();
    page.remove();
}

#[wasm_bindgen_test]
fn timeframe_tabs_switch_active_class() {
    let first = append("button", "", "timeframe active");
    let second = append("button", "", "timeframe");

    let _tabs = timeframe_tabs().unwrap();
    second.dyn_ref::<HtmlElement>().unwrap().click();
    assert!(dom::has_class(&second, "active"));
    assert!(!dom::has_class(&first, "active"));

    first.remove();
    second.remove();
}
