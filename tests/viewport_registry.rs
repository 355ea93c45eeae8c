use vip_club_site_wasm::domain::viewport::{HERO_STATS_THRESHOLD, REVEAL_THRESHOLD, Threshold, ViewportRegistry};

#[test]
fn fires_once_when_threshold_is_met() {
    let mut registry = ViewportRegistry::new();
    let id = registry.register(Threshold::new(HERO_STATS_THRESHOLD));

    assert!(!registry.report(id, false, 0.9));
    assert!(!registry.report(id, true, 0.3));
    assert!(registry.report(id, true, 0.495));
    assert!(!registry.report(id, true, 1.0));
    assert!(!registry.is_observing(id));
    assert!(registry.is_empty());
}

#[test]
fn registrations_are_independent() {
    let mut registry = ViewportRegistry::new();
    let a = registry.register(Threshold::new(REVEAL_THRESHOLD));
    let b = registry.register(Threshold::new(REVEAL_THRESHOLD));
    assert_ne!(a, b);

    assert!(registry.report(b, true, 0.2));
    assert!(registry.is_observing(a));
    assert_eq!(registry.len(), 1);
    assert!(registry.unregister(a));
    assert!(!registry.unregister(a));
}

#[test]
fn threshold_is_clamped() {
    assert_eq!(Threshold::new(1.5).value(), 1.0);
    assert_eq!(Threshold::new(-0.2).value(), 0.0);
    assert_eq!(Threshold::new(f64::NAN).value(), 0.0);
    assert!(Threshold::new(0.0).reached_by(0.0));
}
