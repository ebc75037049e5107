use globe_core::{LandingSchedule, NoteId};

#[test]
fn pops_only_due_timers_in_order() {
    let mut s = LandingSchedule::new();
    s.schedule(300.0, NoteId::from("c"));
    s.schedule(100.0, NoteId::from("a"));
    s.schedule(200.0, NoteId::from("b"));

    assert_eq!(s.next_due(), Some(100.0));
    assert!(s.pop_due(50.0).is_none());
    let (_, first) = s.pop_due(250.0).expect("a is due");
    let (_, second) = s.pop_due(250.0).expect("b is due");
    assert_eq!(first.as_str(), "a");
    assert_eq!(second.as_str(), "b");
    assert!(s.pop_due(250.0).is_none());
    assert_eq!(s.len(), 1);
}

#[test]
fn equal_due_times_keep_scheduling_order() {
    let mut s = LandingSchedule::new();
    let h1 = s.schedule(10.0, NoteId::from("first"));
    let h2 = s.schedule(10.0, NoteId::from("second"));
    assert!(h1 < h2);
    assert_eq!(s.pop_due(10.0).map(|(h, _)| h), Some(h1));
    assert_eq!(s.pop_due(10.0).map(|(h, _)| h), Some(h2));
}

#[test]
fn cancelled_timers_never_fire() {
    let mut s = LandingSchedule::new();
    let h = s.schedule(10.0, NoteId::from("x"));
    s.schedule(20.0, NoteId::from("y"));
    assert!(s.is_pending(h));
    assert!(s.cancel(h));
    assert!(!s.cancel(h));
    assert!(!s.is_pending(h));
    assert_eq!(s.next_due(), Some(20.0));
    let fired: Vec<_> = std::iter::from_fn(|| s.pop_due(100.0)).collect();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].1.as_str(), "y");
    assert!(s.is_empty());
}

#[test]
fn cancel_after_fire_reports_false() {
    let mut s = LandingSchedule::new();
    let h = s.schedule(0.0, NoteId::from("z"));
    assert!(s.pop_due(0.0).is_some());
    assert!(!s.cancel(h));
    assert_eq!(s.next_due(), None);
}
