//! DOM-free behaviour of every site widget. Nothing in here touches `web_sys`,
//! so the whole layer is exercised by native tests.

pub mod chart;
pub mod counters;
pub mod errors;
pub mod forms;
pub mod listing;
pub mod logging;
pub mod navigation;
pub mod notifications;
pub mod overlays;
pub mod random;
pub mod starfield;
pub mod ticker;
pub mod viewport;
