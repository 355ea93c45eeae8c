use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub const TICKER_REFRESH_MS: u32 = 5000;
/// Price step is uniform in `[-0.005, +0.005]`.
pub const PRICE_STEP_SPAN: f64 = 0.01;
/// Fresh delta is uniform in `[-0.0025, +0.0025]`.
pub const DELTA_SPAN: f64 = 0.005;
pub const DISPLAY_DECIMALS: usize = 4;

/// Value Object - visual class of a ticker delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    #[display(fmt = "positive")]
    Positive,
    #[display(fmt = "negative")]
    Negative,
}

impl Trend {
    pub fn of(delta: f64) -> Self {
        if delta >= 0.0 { Trend::Positive } else { Trend::Negative }
    }
}

/// Seed quote as authored in the page template (strings kept verbatim for the first paint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentQuote {
    pub pair: String,
    pub price: String,
    pub change: String,
}

impl InstrumentQuote {
    pub fn new(pair: &str, price: &str, change: &str) -> Self {
        Self { pair: pair.to_string(), price: price.to_string(), change: change.to_string() }
    }
}

pub fn default_instruments() -> Vec<InstrumentQuote> {
    [
        ("EUR/USD", "1.0894", "+0.0024"),
        ("GBP/USD", "1.2541", "+0.0018"),
        ("USD/JPY", "138.62", "-0.24"),
        ("AUD/USD", "0.6678", "-0.0012"),
        ("USD/CAD", "1.3521", "+0.0015"),
        ("NZD/USD", "0.6234", "-0.0008"),
        ("USD/CHF", "0.8942", "-0.0010"),
        ("XAU/USD", "1978.42", "+12.56"),
        ("BTC/USD", "27350", "+420"),
        ("ETH/USD", "1850", "+32"),
    ]
    .into_iter()
    .map(|(pair, price, change)| InstrumentQuote::new(pair, price, change))
    .collect()
}
