use vip_club_site_wasm::domain::counters::{
    CounterPhase, CounterRegistry, CounterSuffix, MetricTarget, StartOutcome,
};

fn stat1() -> MetricTarget {
    MetricTarget::new("stat1", 1250.0, CounterSuffix::None, 2000)
}

#[test]
fn second_trigger_is_ignored() {
    let mut registry = CounterRegistry::new();
    assert_eq!(registry.begin(stat1(), Some("0")), StartOutcome::Started);
    assert_eq!(registry.begin(stat1(), Some("0")), StartOutcome::AlreadyAnimated);
    assert_eq!(registry.running_count(), 1);

    while let Some(frame) = registry.tick("stat1") {
        if frame.finished {
            break;
        }
    }
    assert_eq!(registry.phase("stat1"), Some(CounterPhase::Complete));
    assert_eq!(registry.displayed("stat1"), Some("1,250"));
    assert_eq!(registry.begin(stat1(), Some("1,250")), StartOutcome::AlreadyAnimated);
}

#[test]
fn element_already_showing_a_value_is_adopted() {
    let mut registry = CounterRegistry::new();
    assert_eq!(registry.begin(stat1(), Some("1,250")), StartOutcome::AdoptedRendered);
    assert_eq!(registry.phase("stat1"), Some(CounterPhase::Complete));
    assert_eq!(registry.tick("stat1"), None);
    assert_eq!(registry.displayed("stat1"), Some("1,250"));
}

#[test]
fn unknown_text_starts_from_zero() {
    let mut registry = CounterRegistry::new();
    assert_eq!(registry.begin(stat1(), None), StartOutcome::Started);
    assert_eq!(registry.begin(stat1(), Some("  0 ")), StartOutcome::AlreadyAnimated);
}

#[test]
fn cancel_all_stops_only_running_counters() {
    let mut registry = CounterRegistry::new();
    registry.begin(stat1(), Some("0"));
    registry.begin(MetricTarget::new("stat2", 8.2, CounterSuffix::Percent, 2000), Some("0.0%"));
    registry.begin(MetricTarget::new("stat3", 324.0, CounterSuffix::None, 2000), Some("324"));

    assert_eq!(registry.cancel_all(), 2);
    assert_eq!(registry.cancel_all(), 0);
    assert_eq!(registry.phase("stat1"), Some(CounterPhase::Cancelled));
    assert_eq!(registry.phase("stat3"), Some(CounterPhase::Complete));
    assert_eq!(registry.tick("stat2"), None);
    assert!(!registry.cancel("missing"));
}
