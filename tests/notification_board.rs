use std::str::FromStr;

use vip_club_site_wasm::domain::notifications::{
    NOTIFICATION_LIFETIME_MS, NotificationBoard, NotificationId, Severity,
};

#[test]
fn notifications_stack_in_creation_order() {
    let mut board = NotificationBoard::default();
    let a = board.push("Saved", Severity::Success, 0);
    let b = board.push("Saved", Severity::Success, 10);

    assert_ne!(a.id, b.id);
    assert_eq!(board.active().len(), 2);
    assert_eq!(board.active()[0].id, a.id);
    assert_eq!(a.id.to_string(), "notification-1");
    assert_eq!(a.css_class(), "notification success");
    assert_eq!(board.deadline(b.id), Some(10 + u64::from(NOTIFICATION_LIFETIME_MS)));
}

#[test]
fn expiry_removes_only_the_named_notification() {
    let mut board = NotificationBoard::new(5000);
    let early = board.push("first", Severity::Info, 0);
    let late = board.push("second", Severity::Error, 1000);

    assert_eq!(board.deadline(early.id), Some(5000));
    assert_eq!(board.expire(early.id).map(|n| n.id), Some(early.id));
    assert!(board.contains(late.id));
    assert!(!board.contains(early.id));
    assert_eq!(board.deadline(early.id), None);
}

#[test]
fn removal_happens_at_most_once() {
    let mut board = NotificationBoard::default();
    let n = board.push("bye", Severity::Info, 0);

    assert!(board.dismiss(n.id).is_some());
    assert!(board.dismiss(n.id).is_none());
    assert!(board.expire(n.id).is_none());
    assert!(board.dismiss(NotificationId(99)).is_none());
}

#[test]
fn styles_are_claimed_once() {
    let mut board = NotificationBoard::default();
    assert!(board.claim_style_injection());
    assert!(!board.claim_style_injection());
    board.clear();
    assert!(!board.claim_style_injection());
}

#[test]
fn severity_parses_lowercase_names() {
    assert_eq!(Severity::from_str("error").unwrap(), Severity::Error);
    assert_eq!(Severity::from_str("success").unwrap(), Severity::Success);
    assert!(Severity::from_str("fatal").is_err());
    assert_eq!(Severity::default(), Severity::Info);
}
