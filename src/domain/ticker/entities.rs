use super::value_objects::{
    DELTA_SPAN, DISPLAY_DECIMALS, InstrumentQuote, PRICE_STEP_SPAN, Trend,
};
use crate::domain::counters::to_fixed;
use crate::domain::random::RandomSource;

/// Entity - one rendered row of the price strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerRow {
    pub pair_label: String,
    price: f64,
    delta: f64,
    price_text: String,
    delta_text: String,
}

impl TickerRow {
    /// Unparseable seed numbers fall back to zero but keep their text for the first paint.
    pub fn from_quote(quote: &InstrumentQuote) -> Self {
        let price = quote.price.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        let delta = quote.change.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        Self {
            pair_label: quote.pair.clone(),
            price,
            delta,
            price_text: quote.price.clone(),
            delta_text: quote.change.clone(),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn delta_text(&self) -> &str {
        &self.delta_text
    }

    pub fn trend(&self) -> Trend {
        Trend::of(self.delta)
    }

    /// `ticker-change positive|negative`
    pub fn change_class(&self) -> String {
        format!("ticker-change {}", self.trend().as_ref())
    }

    /// Random-walk the displayed price and redraw the delta. Non-finite results keep the old value.
    ///
    /// Each step starts from the four-decimal text on screen, not from a hidden
    /// full-precision value.
    pub fn perturb(&mut self, rng: &mut dyn RandomSource) {
        let next_price = self.price + rng.centered(PRICE_STEP_SPAN);
        if next_price.is_finite() {
            self.price = next_price;
        }
        self.price_text = to_fixed(self.price, DISPLAY_DECIMALS);
        self.price = self.price_text.parse().unwrap_or(self.price);

        let next_delta = rng.centered(DELTA_SPAN);
        if next_delta.is_finite() {
            // fold -0.0 so the text never reads "+-0.0000"
            self.delta = if next_delta == 0.0 { 0.0 } else { next_delta };
        }
        let sign = if self.delta >= 0.0 { "+" } else { "" };
        self.delta_text = format!("{}{}", sign, to_fixed(self.delta, DISPLAY_DECIMALS));
    }
}

/// Aggregate - the doubled render list behind the seamless scrolling strip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerBoard {
    rows: Vec<TickerRow>,
    instruments: usize,
}

impl TickerBoard {
    /// `[a, b, c]` becomes `[a, b, c, a, b, c]`.
    pub fn initialize(quotes: &[InstrumentQuote]) -> Self {
        let distinct: Vec<TickerRow> = quotes.iter().map(TickerRow::from_quote).collect();
        let mut rows = Vec::with_capacity(distinct.len() * 2);
        rows.extend(distinct.iter().cloned());
        rows.extend(distinct);
        Self { rows, instruments: quotes.len() }
    }

    pub fn rows(&self) -> &[TickerRow] {
        &self.rows
    }

    pub fn instrument_count(&self) -> usize {
        self.instruments
    }

    /// Every rendered row moves independently, duplicates included.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) {
        for row in &mut self.rows {
            row.perturb(rng);
        }
    }
}
