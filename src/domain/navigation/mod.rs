pub mod anchors;
pub mod menu;
pub mod sections;

pub use anchors::{
    CONTACT_PAGE, CONTACT_SECTION_ID, DEFAULT_HEADER_HEIGHT_PX, anchor_scroll_top, anchor_target,
};
pub use menu::{MOBILE_BREAKPOINT_PX, MenuChange, MenuEvent, MobileMenu};
pub use sections::{
    HEADER_SCROLLED_OFFSET_PX, NavIndicator, SCROLL_LOOK_AHEAD_PX, SectionAnchor,
    SectionNavTracker, header_scrolled,
};
