/// Used when the page has no `<header>` to measure.
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 80.0;
pub const CONTACT_SECTION_ID: &str = "contact";
pub const CONTACT_PAGE: &str = "contact.html";

/// Selector for an in-page link, or `None` for a bare `#` or an external href.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href.len() < 2 {
        return None;
    }
    Some(href)
}

/// Scroll offset that lands the target just below the fixed header.
pub fn anchor_scroll_top(target_offset_top: f64, header_height: Option<f64>) -> f64 {
    target_offset_top - header_height.unwrap_or(DEFAULT_HEADER_HEIGHT_PX)
}
