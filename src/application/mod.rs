pub mod config;
pub mod controller;

pub use config::{FeatureSet, PageConfig, TimingConfig};
pub use controller::SiteController;
