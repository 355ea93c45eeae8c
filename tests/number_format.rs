use vip_club_site_wasm::domain::counters::{group_thousands, to_fixed};

#[test]
fn groups_like_en_us_locale() {
    assert_eq!(group_thousands(0.0), "0");
    assert_eq!(group_thousands(999.0), "999");
    assert_eq!(group_thousands(1000.0), "1,000");
    assert_eq!(group_thousands(27500.0), "27,500");
    assert_eq!(group_thousands(1234567.0), "1,234,567");
    assert_eq!(group_thousands(-1234.0), "-1,234");
}

#[test]
fn keeps_at_most_three_fraction_digits() {
    assert_eq!(group_thousands(1234.5), "1,234.5");
    assert_eq!(group_thousands(8.2), "8.2");
    assert_eq!(group_thousands(1.23456), "1.235");
    assert_eq!(group_thousands(2.0001), "2");
}

#[test]
fn negative_zero_has_no_sign() {
    assert_eq!(group_thousands(-0.0), "0");
    assert_eq!(group_thousands(-0.0001), "0");
}

#[test]
fn exact_ties_round_away_from_zero() {
    assert_eq!(to_fixed(0.25, 1), "0.3");
    assert_eq!(to_fixed(1.25, 1), "1.3");
    assert_eq!(to_fixed(-0.75, 1), "-0.8");
    assert_eq!(group_thousands(1234.0625), "1,234.063");
    assert_eq!(group_thousands(0.0005), "0.001");
}

#[test]
fn near_ties_follow_the_stored_value() {
    // 0.15 is stored just below the tie
    assert_eq!(to_fixed(0.15, 1), "0.1");
    assert_eq!(to_fixed(8.2, 1), "8.2");
    assert_eq!(to_fixed(0.0, 1), "0.0");
}
