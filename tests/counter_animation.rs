use quickcheck_macros::quickcheck;
use vip_club_site_wasm::domain::counters::{
    CounterAnimation, CounterPhase, CounterSuffix, FormatPolicy, FramePhase, MetricTarget, hero_metrics,
    statistics_metrics,
};

fn numeric(text: &str) -> f64 {
    text.trim_end_matches(['%', 'K', '+']).replace(',', "").parse().unwrap()
}

#[test]
fn percent_counter_ends_exactly_on_target() {
    let target = MetricTarget::new("stat2", 8.2, CounterSuffix::Percent, 2000);
    let mut animation = CounterAnimation::new(target);
    assert_eq!(animation.displayed(), "0.0%");
    assert!(animation.start());

    let frames = animation.run_to_completion();

    assert_eq!(frames.first().map(String::as_str), Some("0.1%"));
    assert_eq!(frames.last().map(String::as_str), Some("8.2%"));
    assert!((125..=126).contains(&frames.len()), "{} frames", frames.len());
    assert!(frames.windows(2).all(|w| numeric(&w[0]) <= numeric(&w[1])));
    assert_eq!(animation.phase(), CounterPhase::Complete);
}

#[test]
fn percent_frames_round_exact_ties_up() {
    let target = MetricTarget::new("p", 2.5, CounterSuffix::Percent, 160);
    let mut animation = CounterAnimation::new(target);
    animation.start();

    let frames = animation.run_to_completion();

    assert_eq!(&frames[..5], ["0.3%", "0.5%", "0.8%", "1.0%", "1.3%"]);
    assert_eq!(frames.last().map(String::as_str), Some("2.5%"));
}

#[test]
fn grouped_counter_floors_while_running() {
    let target = MetricTarget::new("stat4", 27500.0, CounterSuffix::None, 2000);
    let mut animation = CounterAnimation::new(target);
    animation.start();

    let frames = animation.run_to_completion();

    assert_eq!(frames[0], "220");
    assert_eq!(frames[4], "1,100");
    assert_eq!(frames.last().unwrap(), "27,500");
}

#[test]
fn statistics_counters_round_to_integers() {
    let metrics = statistics_metrics();
    assert_eq!(metrics.len(), 4);
    assert!(metrics.iter().all(|m| m.duration_ms == 3000 && m.tick_ms == 20));

    let mut percent = CounterAnimation::new(metrics[2].clone());
    percent.start();
    let frames = percent.run_to_completion();
    assert_eq!(frames[0], "1%");
    assert_eq!(frames.last().unwrap(), "98%");
    assert!(frames.iter().all(|f| !f.contains('.')));
}

#[test]
fn hero_metrics_match_landing_page() {
    let ids: Vec<_> = hero_metrics().into_iter().map(|m| (m.id, m.final_value, m.suffix)).collect();
    assert_eq!(
        ids,
        vec![
            ("stat1".to_string(), 1250.0, CounterSuffix::None),
            ("stat2".to_string(), 8.2, CounterSuffix::Percent),
            ("stat3".to_string(), 324.0, CounterSuffix::None),
            ("stat4".to_string(), 27500.0, CounterSuffix::None),
        ]
    );
}

#[test]
fn terminal_phases_never_restart() {
    let target = MetricTarget::new("stat1", 10.0, CounterSuffix::None, 100).with_tick(10);
    let mut animation = CounterAnimation::new(target.clone());
    assert!(animation.start());
    assert!(!animation.start());
    animation.run_to_completion();
    assert!(!animation.start());
    assert_eq!(animation.tick(), None);

    let mut cancelled = CounterAnimation::new(target);
    cancelled.start();
    cancelled.tick();
    assert!(cancelled.cancel());
    assert!(!cancelled.cancel());
    assert_eq!(cancelled.tick(), None);
    assert_eq!(cancelled.phase(), CounterPhase::Cancelled);
}

#[test]
fn zero_target_completes_on_first_tick() {
    let mut animation = CounterAnimation::new(MetricTarget::new("z", 0.0, CounterSuffix::None, 2000));
    animation.start();
    assert_eq!(animation.run_to_completion(), vec!["0".to_string()]);
    assert_eq!(animation.ticks(), 1);
}

#[test]
fn policy_override_beats_suffix_table() {
    let target = MetricTarget::new("x", 98.0, CounterSuffix::Percent, 3000);
    assert_eq!(target.policy(), FormatPolicy::OneDecimal);
    let target = target.with_policy(FormatPolicy::RoundedInteger);
    assert_eq!(target.render(97.6, FramePhase::Running), "98%");
    assert_eq!(FormatPolicy::for_suffix(CounterSuffix::Thousands), FormatPolicy::Grouped);
    assert_eq!(
        FormatPolicy::Grouped.render(12.5, CounterSuffix::Thousands, FramePhase::Final),
        "12.5K+"
    );
}

#[test]
fn invalid_targets_are_rejected() {
    assert!(MetricTarget::new("a", -1.0, CounterSuffix::None, 2000).validate().is_err());
    assert!(MetricTarget::new("b", f64::NAN, CounterSuffix::None, 2000).validate().is_err());
    assert!(MetricTarget::new("c", 5.0, CounterSuffix::None, 0).validate().is_err());
    assert!(MetricTarget::new("d", 5.0, CounterSuffix::None, 100).with_tick(0).validate().is_err());
    assert!(MetricTarget::new("e", 5.0, CounterSuffix::None, 100).validate().is_ok());
}

#[quickcheck]
fn frames_never_decrease_and_land_on_target(final_value: u16, duration: u16, tick: u8) -> bool {
    let duration = u32::from(duration % 5000) + 1;
    let tick = u32::from(tick % 100) + 1;
    let target = MetricTarget::new("q", f64::from(final_value), CounterSuffix::None, duration).with_tick(tick);
    let expected_last = target.render(f64::from(final_value), FramePhase::Final);

    let mut animation = CounterAnimation::new(target);
    animation.start();
    let frames = animation.run_to_completion();

    frames.windows(2).all(|w| numeric(&w[0]) <= numeric(&w[1]))
        && frames.last() == Some(&expected_last)
        && animation.phase() == CounterPhase::Complete
}
