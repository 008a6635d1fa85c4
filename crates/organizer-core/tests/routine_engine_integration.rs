//! Integration tests for the routine reset and streak rules.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use organizer_core::{
    AppState, Clock, FixedClock, Frequency, ImageAttachment, ItemKind, ResetPolicy, Routine,
    RoutineEngine,
};
use proptest::prelude::*;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn test_daily_reset_repeated_same_day_clears_date_each_time() {
    let policy = ResetPolicy::default();
    let mut engine = RoutineEngine::new();
    let id = engine
        .add("meditate".into(), ImageAttachment::none(), at(2026, 10, 16, 8))
        .id;
    engine.toggle_done(id, true, at(2026, 10, 16, 8)).unwrap();

    // Next day: yesterday's completion is cleared.
    let today = at(2026, 10, 17, 7);
    engine.apply_periodic_reset(today, &policy);
    let r = engine.get(id).unwrap();
    assert!(!r.done);
    assert_eq!(r.last_completed_date, None);

    // Later the same day the rule still qualifies and clears the date again.
    engine.apply_periodic_reset(today + Duration::hours(6), &policy);
    let r = engine.get(id).unwrap();
    assert!(!r.done);
    assert_eq!(r.last_completed_date, None);
    assert_eq!(r.streak, 1);
}

#[test]
fn test_weekly_untouched_on_non_week_start_days() {
    let policy = ResetPolicy::default();
    let start = at(2026, 10, 12, 9); // Monday
    for completed_offset in 0..6i64 {
        let mut engine = RoutineEngine::new();
        let id = engine.add("review".into(), ImageAttachment::none(), start).id;
        engine.set_frequency(id, Frequency::Weekly).unwrap();
        engine
            .toggle_done(id, true, start + Duration::days(completed_offset))
            .unwrap();
        let before = engine.get(id).unwrap().clone();

        // Monday through Saturday of that week.
        for day in 0..6 {
            engine.apply_periodic_reset(start + Duration::days(day), &policy);
            let r = engine.get(id).unwrap();
            assert_eq!(r.done, before.done);
            assert_eq!(r.streak, before.streak);
        }
    }
}

fn completed_on_reset_day(
    frequency: Frequency,
    policy: &ResetPolicy,
    day: NaiveDateTime,
) -> Routine {
    let mut engine = RoutineEngine::new();
    let id = engine
        .add("chore".into(), ImageAttachment::none(), day - Duration::days(3))
        .id;
    engine.set_frequency(id, frequency).unwrap();

    engine.apply_periodic_reset(day, policy);
    engine.toggle_done(id, true, day).unwrap();
    engine.apply_periodic_reset(day + Duration::hours(4), policy);
    engine.get(id).unwrap().clone()
}

#[test]
fn test_weekly_completed_on_week_start_survives_reset() {
    let sunday = at(2026, 10, 18, 8);
    let r = completed_on_reset_day(Frequency::Weekly, &ResetPolicy::default(), sunday);
    assert!(r.done);
    assert_eq!(r.streak, 1);
    assert_eq!(r.last_completed_date, Some(sunday.date()));

    let monday = at(2026, 10, 19, 8);
    let policy = ResetPolicy {
        week_start: chrono::Weekday::Mon,
    };
    let r = completed_on_reset_day(Frequency::Weekly, &policy, monday);
    assert!(r.done);
    assert_eq!(r.last_completed_date, Some(monday.date()));
}

#[test]
fn test_monthly_completed_on_first_survives_reset() {
    let first = at(2026, 11, 1, 8);
    let r = completed_on_reset_day(Frequency::Monthly, &ResetPolicy::default(), first);
    assert!(r.done);
    assert_eq!(r.streak, 1);
    assert_eq!(r.last_completed_date, Some(first.date()));
}

#[test]
fn test_frequency_change_can_reset_on_same_activation() {
    let policy = ResetPolicy::default();
    let mut engine = RoutineEngine::new();
    let id = engine
        .add("plan week".into(), ImageAttachment::none(), at(2026, 10, 16, 9))
        .id;
    engine.set_frequency(id, Frequency::Weekly).unwrap();
    engine.toggle_done(id, true, at(2026, 10, 16, 9)).unwrap();

    // Saturday: weekly rule does not fire.
    engine.apply_periodic_reset(at(2026, 10, 17, 9), &policy);
    assert!(engine.get(id).unwrap().done);

    // Switching to daily makes the very next reset pass qualify.
    engine.set_frequency(id, Frequency::Daily).unwrap();
    assert!(engine.get(id).unwrap().done);
    engine.apply_periodic_reset(at(2026, 10, 17, 9), &policy);
    let r = engine.get(id).unwrap();
    assert!(!r.done);
    assert_eq!(r.streak, 1);
}

#[test]
fn test_activation_through_app_state_with_clock() {
    let mut clock = FixedClock::new(at(2026, 10, 17, 9));
    let policy = ResetPolicy::default();
    let mut state = AppState::new();
    let id = state.add(
        ItemKind::Routines,
        "water plants".into(),
        ImageAttachment::none(),
        clock.now(),
    );
    state.toggle_done(id, true, clock.now()).unwrap();

    clock.advance(Duration::days(1));
    state.activate(clock.now(), &policy);
    assert!(!state.routines.get(id).unwrap().done);

    state.toggle_done(id, true, clock.now()).unwrap();
    assert_eq!(state.routines.total_streak(), 2);
}

#[derive(Debug, Clone)]
enum Action {
    Toggle(bool),
    NextDay,
    SetFrequency(Frequency),
    Reset,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<bool>().prop_map(Action::Toggle),
        Just(Action::NextDay),
        prop_oneof![
            Just(Frequency::Daily),
            Just(Frequency::Weekly),
            Just(Frequency::Monthly)
        ]
        .prop_map(Action::SetFrequency),
        Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn streak_never_decreases(actions in proptest::collection::vec(action(), 1..60)) {
        let policy = ResetPolicy::default();
        let mut now = at(2026, 1, 1, 9);
        let mut engine = RoutineEngine::new();
        let id = engine.add("habit".into(), ImageAttachment::none(), now).id;
        let mut last = 0u32;

        for action in actions {
            match action {
                Action::Toggle(done) => { engine.toggle_done(id, done, now).unwrap(); }
                Action::NextDay => now += Duration::days(1),
                Action::SetFrequency(f) => { engine.set_frequency(id, f).unwrap(); }
                Action::Reset => engine.apply_periodic_reset(now, &policy),
            }
            let r = engine.get(id).unwrap();
            prop_assert!(r.streak >= last);
            if r.done {
                prop_assert!(r.last_completed_date.is_some());
            }
            last = r.streak;
        }
    }

    #[test]
    fn repeated_completion_on_one_day_counts_once(times in 1usize..10) {
        let now = at(2026, 10, 17, 9);
        let mut engine = RoutineEngine::new();
        let id = engine.add("habit".into(), ImageAttachment::none(), now).id;
        for i in 0..times {
            engine.toggle_done(id, true, now + Duration::minutes(i as i64)).unwrap();
        }
        prop_assert_eq!(engine.get(id).unwrap().streak, 1);
    }
}
