pub mod entities;
pub mod value_objects;

pub use entities::{TickerBoard, TickerRow};
pub use value_objects::{InstrumentQuote, Trend, default_instruments};
