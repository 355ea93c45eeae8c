use serde::{Deserialize, Serialize};

use crate::domain::chart::{CHART_REFRESH_MS, DRAW_DELAY_MS};
use crate::domain::counters::{MetricTarget, hero_metrics, statistics_metrics};
use crate::domain::errors::ConfigurationError;
use crate::domain::forms::SIMULATED_SEND_MS;
use crate::domain::navigation::menu::RESIZE_DEBOUNCE_MS;
use crate::domain::notifications::NOTIFICATION_LIFETIME_MS;
use crate::domain::overlays::LOADING_HIDE_MS;
use crate::domain::ticker::{InstrumentQuote, default_instruments};
use crate::domain::ticker::value_objects::TICKER_REFRESH_MS;

/// Which widgets a page carries. Every page loads the same module and flips these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub hero_counters: bool,
    pub statistics_counters: bool,
    pub ticker: bool,
    pub chart: bool,
    pub starfield: bool,
    pub section_nav: bool,
    pub mobile_menu: bool,
    pub header_scroll: bool,
    pub reveal_cards: bool,
    pub contact_form: bool,
    pub newsletter: bool,
    pub loading_overlay: bool,
    pub anchor_scroll: bool,
    pub cta_contact: bool,
    pub login_modal: bool,
    pub timeframe_tabs: bool,
    pub blog_filters: bool,
    pub event_filters: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            hero_counters: true,
            statistics_counters: true,
            ticker: true,
            chart: true,
            starfield: true,
            section_nav: true,
            mobile_menu: true,
            header_scroll: true,
            reveal_cards: true,
            contact_form: true,
            newsletter: true,
            loading_overlay: true,
            anchor_scroll: true,
            cta_contact: true,
            login_modal: true,
            timeframe_tabs: true,
            blog_filters: true,
            event_filters: true,
        }
    }
}

impl FeatureSet {
    pub fn none() -> Self {
        Self {
            hero_counters: false,
            statistics_counters: false,
            ticker: false,
            chart: false,
            starfield: false,
            section_nav: false,
            mobile_menu: false,
            header_scroll: false,
            reveal_cards: false,
            contact_form: false,
            newsletter: false,
            loading_overlay: false,
            anchor_scroll: false,
            cta_contact: false,
            login_modal: false,
            timeframe_tabs: false,
            blog_filters: false,
            event_filters: false,
        }
    }
}

/// Every timer period the widgets run on, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub ticker_refresh_ms: u32,
    pub chart_refresh_ms: u32,
    pub chart_draw_delay_ms: u32,
    pub notification_lifetime_ms: u32,
    pub form_send_delay_ms: u32,
    pub resize_debounce_ms: u32,
    pub loading_hide_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ticker_refresh_ms: TICKER_REFRESH_MS,
            chart_refresh_ms: CHART_REFRESH_MS,
            chart_draw_delay_ms: DRAW_DELAY_MS,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
            form_send_delay_ms: SIMULATED_SEND_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            loading_hide_ms: LOADING_HIDE_MS,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        // the draw delay may legitimately be zero; periods and lifetimes may not
        let periods = [
            ("ticker_refresh_ms", self.ticker_refresh_ms),
            ("chart_refresh_ms", self.chart_refresh_ms),
            ("notification_lifetime_ms", self.notification_lifetime_ms),
        ];
        match periods.into_iter().find(|(_, value)| *value == 0) {
            Some((field, value)) => Err(ConfigurationError::InvalidTiming { field, value }),
            None => Ok(()),
        }
    }
}

/// Page-level configuration, usually embedded as JSON by the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub features: FeatureSet,
    pub timing: TimingConfig,
    pub hero_metrics: Vec<MetricTarget>,
    pub statistics_metrics: Vec<MetricTarget>,
    pub instruments: Vec<InstrumentQuote>,
    /// Fixed seed for the decorative generators; `None` uses `Math.random`.
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            features: FeatureSet::default(),
            timing: TimingConfig::default(),
            hero_metrics: hero_metrics(),
            statistics_metrics: statistics_metrics(),
            instruments: default_instruments(),
            seed: None,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: PageConfig =
            serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_features(mut self, features: FeatureSet) -> Self {
        self.features = features;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.timing.validate()?;
        self.hero_metrics
            .iter()
            .chain(&self.statistics_metrics)
            .try_for_each(MetricTarget::validate)
    }
}
