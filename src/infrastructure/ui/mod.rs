//! DOM bindings for each page widget. Every binding owns its listeners and
//! timers and releases them on `detach`/`stop` or when dropped.

pub mod anchors;
pub mod chart;
pub mod counters;
pub mod forms;
pub mod listing;
pub mod menu;
pub mod navigation;
pub mod notifications;
pub mod overlays;
pub mod reveal;
pub mod ticker;

pub use anchors::{AnchorScrollBinding, CtaBinding};
pub use chart::ChartWidget;
pub use counters::CounterDriver;
pub use forms::{ContactFormBinding, NewsletterBinding};
pub use listing::{ListingBinding, TabStrip, timeframe_tabs};
pub use menu::MenuBinding;
pub use navigation::ScrollBinding;
pub use notifications::{NotificationCenter, NotificationStack};
pub use overlays::{LoadingOverlay, LoginModalBinding};
pub use reveal::{RevealBinding, RevealPlan};
pub use ticker::{TickerStrip, TickerWidget};
