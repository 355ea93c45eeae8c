use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::errors::ConfigurationError;

pub const HERO_DURATION_MS: u32 = 2000;
pub const HERO_TICK_MS: u32 = 16;
pub const STATISTICS_DURATION_MS: u32 = 3000;
pub const STATISTICS_TICK_MS: u32 = 20;

/// Value Object - text appended after the animated number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum CounterSuffix {
    #[default]
    #[display(fmt = "")]
    #[strum(serialize = "")]
    #[serde(rename = "")]
    None,
    #[display(fmt = "%")]
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
    #[display(fmt = "K+")]
    #[strum(serialize = "K+")]
    #[serde(rename = "K+")]
    Thousands,
}

/// How an intermediate or final counter value becomes text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPolicy {
    /// Floored en-US grouped integer while running (`27,500`), exact grouped value at the end.
    #[default]
    Grouped,
    /// One decimal place (`8.2%`).
    OneDecimal,
    /// `Math.round`-style integer, used by the statistics section.
    RoundedInteger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    Running,
    Final,
}

/// Default policy per suffix. Call sites only differ in value and suffix.
const POLICY_TABLE: [(CounterSuffix, FormatPolicy); 3] = [
    (CounterSuffix::None, FormatPolicy::Grouped),
    (CounterSuffix::Percent, FormatPolicy::OneDecimal),
    (CounterSuffix::Thousands, FormatPolicy::Grouped),
];

impl FormatPolicy {
    pub fn for_suffix(suffix: CounterSuffix) -> Self {
        POLICY_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == suffix)
            .map(|(_, policy)| *policy)
            .unwrap_or_default()
    }

    pub fn render(self, value: f64, suffix: CounterSuffix, phase: FramePhase) -> String {
        match (self, phase) {
            (FormatPolicy::OneDecimal, _) => format!("{}{}", to_fixed(value, 1), suffix),
            (FormatPolicy::Grouped, FramePhase::Running) => {
                format!("{}{}", group_thousands(value.floor()), suffix)
            }
            (FormatPolicy::Grouped, FramePhase::Final) => {
                format!("{}{}", group_thousands(value), suffix)
            }
            (FormatPolicy::RoundedInteger, _) => format!("{}{}", value.round() as i64, suffix),
        }
    }
}

const EXACT_TAIL: usize = 32;

/// Fixed-point text with exact decimal ties rounded away from zero (`0.25` -> `0.3`).
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let exact = format!("{:.*}", digits + EXACT_TAIL, magnitude);
    let tail = &exact[exact.len() - EXACT_TAIL..];
    if tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0') {
        // magnitude * scale is k + 0.5 exactly here
        let scale = 10f64.powi(digits as i32);
        let rounded = (magnitude * scale).ceil() / scale;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.*}", sign, digits, rounded);
    }
    format!("{:.*}", digits, value)
}

/// en-US `toLocaleString`: comma thousands separators, at most three fraction digits.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac.len() + 2);
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.is_empty();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Value Object - one animated statistic bound to a DOM id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTarget {
    pub id: String,
    pub final_value: f64,
    #[serde(default)]
    pub suffix: CounterSuffix,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u32,
    /// Overrides the suffix-derived policy from the table.
    #[serde(default)]
    pub policy: Option<FormatPolicy>,
}

fn default_duration_ms() -> u32 {
    HERO_DURATION_MS
}

fn default_tick_ms() -> u32 {
    HERO_TICK_MS
}

impl MetricTarget {
    pub fn new(id: impl Into<String>, final_value: f64, suffix: CounterSuffix, duration_ms: u32) -> Self {
        Self {
            id: id.into(),
            final_value,
            suffix,
            duration_ms,
            tick_ms: HERO_TICK_MS,
            policy: None,
        }
    }

    pub fn with_tick(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_policy(mut self, policy: FormatPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn policy(&self) -> FormatPolicy {
        self.policy.unwrap_or_else(|| FormatPolicy::for_suffix(self.suffix))
    }

    /// Number of ticks the linear ramp is spread over (never below one).
    pub fn step_count(&self) -> f64 {
        (self.duration_ms as f64 / self.tick_ms.max(1) as f64).max(1.0)
    }

    pub fn increment(&self) -> f64 {
        self.final_value / self.step_count()
    }

    pub fn render(&self, value: f64, phase: FramePhase) -> String {
        self.policy().render(value, self.suffix, phase)
    }

    /// Canonical text of an element that has not been animated yet.
    pub fn zero_text(&self) -> String {
        self.render(0.0, FramePhase::Running)
    }

    pub fn is_zero_text(&self, text: &str) -> bool {
        let text = text.trim();
        text == "0" || text == self.zero_text()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.final_value.is_finite() || self.final_value < 0.0 {
            return Err(ConfigurationError::InvalidMetric {
                id: self.id.clone(),
                reason: format!("final value {} must be finite and non-negative", self.final_value),
            });
        }
        if self.duration_ms == 0 {
            return Err(ConfigurationError::InvalidTiming { field: "duration_ms", value: 0 });
        }
        if self.tick_ms == 0 {
            return Err(ConfigurationError::InvalidTiming { field: "tick_ms", value: 0 });
        }
        Ok(())
    }
}

/// Hero strip on the landing page: 2000 ms at 16 ms ticks.
pub fn hero_metrics() -> Vec<MetricTarget> {
    vec![
        MetricTarget::new("stat1", 1250.0, CounterSuffix::None, HERO_DURATION_MS),
        MetricTarget::new("stat2", 8.2, CounterSuffix::Percent, HERO_DURATION_MS),
        MetricTarget::new("stat3", 324.0, CounterSuffix::None, HERO_DURATION_MS),
        MetricTarget::new("stat4", 27500.0, CounterSuffix::None, HERO_DURATION_MS),
    ]
}

/// Statistics section on the studio pages: 3000 ms at 20 ms ticks, rounded integers.
pub fn statistics_metrics() -> Vec<MetricTarget> {
    [(150.0, CounterSuffix::None), (380.0, CounterSuffix::None), (98.0, CounterSuffix::Percent), (45.0, CounterSuffix::None)]
        .into_iter()
        .enumerate()
        .map(|(i, (value, suffix))| {
            MetricTarget::new(format!("stat{}", i + 1), value, suffix, STATISTICS_DURATION_MS)
                .with_tick(STATISTICS_TICK_MS)
                .with_policy(FormatPolicy::RoundedInteger)
        })
        .collect()
}
