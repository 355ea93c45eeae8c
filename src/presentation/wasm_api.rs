use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::application::config::PageConfig;
use crate::application::controller::SiteController;
use crate::domain::counters::{CounterSuffix, HERO_DURATION_MS, MetricTarget, StartOutcome};
use crate::domain::errors::{AppError, ConfigurationError};
use crate::domain::logging::LogComponent;
use crate::domain::notifications::{NotificationId, Severity};
use crate::infrastructure::dom;
use crate::log_warn;

/// JavaScript handle on the page controller. Thin bridge: parsing in, `JsValue` errors out.
#[wasm_bindgen]
pub struct SiteApi {
    controller: SiteController,
}

#[wasm_bindgen]
impl SiteApi {
    /// Start the page from embedded JSON, or from the anchors present in the DOM when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SiteApi, JsValue> {
        let config = match config_json.as_deref().map(str::trim).filter(|json| !json.is_empty()) {
            Some(json) => PageConfig::from_json(json).map_err(AppError::from)?,
            None => PageConfig::default().with_features(dom::detect_features()),
        };
        let controller = SiteController::start(config)?;
        Ok(Self { controller })
    }

    /// Returns the numeric notification id.
    pub fn notify(&self, message: &str, severity: Option<String>) -> f64 {
        let severity = match severity.as_deref() {
            None => Severity::Info,
            Some(raw) => Severity::from_str(raw).unwrap_or_else(|_| {
                log_warn!(LogComponent::Api, "unknown severity '{}', using info", raw);
                Severity::Info
            }),
        };
        self.controller.notify(message, severity).0 as f64
    }

    pub fn dismiss(&self, id: f64) -> bool {
        self.controller.dismiss(NotificationId(id as u64))
    }

    /// `true` when a new count-up started for `id`.
    #[wasm_bindgen(js_name = animateCounter)]
    pub fn animate_counter(
        &self,
        id: String,
        final_value: f64,
        suffix: Option<String>,
        duration_ms: Option<u32>,
    ) -> Result<bool, JsValue> {
        let suffix = match suffix.as_deref() {
            None => CounterSuffix::None,
            Some(raw) => CounterSuffix::from_str(raw).map_err(|_| {
                AppError::from(ConfigurationError::InvalidMetric {
                    id: id.clone(),
                    reason: format!("unknown suffix '{}'", raw),
                })
            })?,
        };
        let target = MetricTarget::new(id, final_value, suffix, duration_ms.unwrap_or(HERO_DURATION_MS));
        let outcome = self.controller.animate_counter(target)?;
        Ok(outcome == Some(StartOutcome::Started))
    }

    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> Option<String> {
        self.controller.current_section()
    }

    #[wasm_bindgen(js_name = isMenuOpen)]
    pub fn is_menu_open(&self) -> bool {
        self.controller.is_menu_open()
    }

    #[wasm_bindgen(js_name = isLoginOpen)]
    pub fn is_login_open(&self) -> bool {
        self.controller.is_login_open()
    }

    pub fn dispose(&mut self) {
        self.controller.dispose();
    }
}

/// Convenience entry point for page templates: `start(document.getElementById('page-config')?.textContent)`.
#[wasm_bindgen]
pub fn start(config_json: Option<String>) -> Result<SiteApi, JsValue> {
    SiteApi::new(config_json)
}
