use quickcheck_macros::quickcheck;
use vip_club_site_wasm::domain::navigation::{NavIndicator, SectionAnchor, SectionNavTracker, header_scrolled};

fn page() -> Vec<SectionAnchor> {
    vec![
        SectionAnchor::new("hero", 0.0, 800.0),
        SectionAnchor::new("about", 800.0, 600.0),
        SectionAnchor::new("contact", 1400.0, 1000.0),
    ]
}

fn dots() -> Vec<NavIndicator> {
    ["HERO", "About", "contact"].into_iter().map(NavIndicator::new).collect()
}

#[test]
fn current_section_uses_look_ahead() {
    let anchors = page();
    let mut tracker = SectionNavTracker::new();

    assert!(tracker.update(0.0, &anchors));
    assert_eq!(tracker.current(), Some("hero"));

    assert!(!tracker.update(599.0, &anchors));
    assert!(tracker.update(600.0, &anchors));
    assert_eq!(tracker.current(), Some("about"));
}

#[test]
fn current_section_is_sticky_outside_every_anchor() {
    let anchors = page();
    let mut tracker = SectionNavTracker::new();
    tracker.update(700.0, &anchors);

    assert!(!tracker.update(10_000.0, &anchors));
    assert_eq!(tracker.current(), Some("about"));
}

#[test]
fn overlapping_sections_resolve_to_the_later_one() {
    let anchors = vec![SectionAnchor::new("a", 0.0, 1000.0), SectionAnchor::new("b", 500.0, 1000.0)];
    let mut tracker = SectionNavTracker::new();
    tracker.update(400.0, &anchors);
    assert_eq!(tracker.current(), Some("b"));
}

#[test]
fn indicators_match_case_insensitively() {
    let anchors = page();
    let mut tracker = SectionNavTracker::new();
    let mut indicators = dots();

    assert_eq!(tracker.apply(&mut indicators), None);
    assert!(indicators.iter().all(|d| !d.active));

    tracker.update(900.0, &anchors);
    assert_eq!(tracker.apply(&mut indicators), Some(1));
    assert_eq!(indicators.iter().filter(|d| d.active).count(), 1);

    tracker.update(0.0, &anchors);
    assert_eq!(tracker.apply(&mut indicators), Some(0));
    assert!(!indicators[1].active);
}

#[test]
fn click_target_pairs_by_position() {
    let anchors = page();
    assert_eq!(SectionNavTracker::click_target(2, &anchors).map(|a| a.id.as_str()), Some("contact"));
    assert!(SectionNavTracker::click_target(3, &anchors).is_none());
}

#[test]
fn header_turns_scrolled_past_one_hundred_pixels() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(100.0));
    assert!(header_scrolled(100.5));
}

#[quickcheck]
fn at_most_one_indicator_is_active(offsets: Vec<u16>) -> bool {
    let anchors = page();
    let mut tracker = SectionNavTracker::new();
    let mut indicators: Vec<NavIndicator> =
        ["hero", "about", "ABOUT", "contact"].into_iter().map(NavIndicator::new).collect();

    offsets.into_iter().all(|offset| {
        tracker.update(f64::from(offset), &anchors);
        tracker.apply(&mut indicators);
        indicators.iter().filter(|d| d.active).count() <= 1
    })
}
