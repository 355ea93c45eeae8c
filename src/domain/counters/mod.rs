pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{CounterAnimation, CounterFrame, CounterPhase};
pub use services::{CounterRegistry, StartOutcome};
pub use value_objects::{
    HERO_DURATION_MS, HERO_TICK_MS, STATISTICS_DURATION_MS, STATISTICS_TICK_MS,
    CounterSuffix, FormatPolicy, FramePhase, MetricTarget, group_thousands, hero_metrics, to_fixed,
    statistics_metrics,
};
