//! Streak and completion laws of the progress store.

use chrono::{Duration, NaiveDate};
use mindforge_core::progress::{FixedClock, ProgressState, ProgressStore, PROGRESS_KEY};
use mindforge_core::storage::{KvStore, MemoryKv};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn seeded_store(
    last: Option<NaiveDate>,
    streak: u32,
    today: NaiveDate,
) -> ProgressStore<MemoryKv, FixedClock> {
    let state = ProgressState {
        current_day: 3,
        completed_days: [1, 2].into_iter().collect(),
        last_session_date: last,
        streak,
    };
    let mut kv = MemoryKv::new();
    kv.set(PROGRESS_KEY, &serde_json::to_string(&state).unwrap())
        .unwrap();
    ProgressStore::with_clock(kv, FixedClock::new(today))
}

#[test]
fn yesterday_extends_streak() {
    let today = base_date();
    let mut store = seeded_store(Some(today - Duration::days(1)), 4, today);
    assert_eq!(store.complete_day(3).unwrap().streak, 5);
}

#[test]
fn long_gap_resets_streak() {
    let today = base_date();
    let mut store = seeded_store(Some(today - Duration::days(5)), 9, today);
    assert_eq!(store.complete_day(3).unwrap().streak, 1);
}

#[test]
fn first_completion_starts_streak() {
    let mut store = ProgressStore::with_clock(MemoryKv::new(), FixedClock::new(base_date()));
    let state = store.complete_day(1).unwrap();
    assert_eq!(state.streak, 1);
    assert_eq!(state.last_session_date, Some(base_date()));
}

#[test]
fn same_day_completion_keeps_streak_but_records_day() {
    let today = base_date();
    let mut store = seeded_store(Some(today), 6, today);
    let state = store.complete_day(3).unwrap();
    assert_eq!(state.streak, 6);
    assert!(state.is_completed(3));
    assert_eq!(state.current_day, 4);
}

#[test]
fn last_day_does_not_advance_past_the_end() {
    let mut store = ProgressStore::with_clock(MemoryKv::new(), FixedClock::new(base_date()));
    assert_eq!(store.complete_day(37).unwrap().current_day, 37);
}

#[test]
fn maintenance_mode_needs_thirty_days() {
    let mut store = ProgressStore::with_clock(MemoryKv::new(), FixedClock::new(base_date()));
    for day in 1..=29 {
        store.complete_day(day).unwrap();
    }
    assert!(!store.is_maintenance_mode());
    store.complete_day(30).unwrap();
    assert!(store.is_maintenance_mode());
    assert_eq!(store.state().max_selectable_day(), 37);
}

#[test]
fn reset_is_idempotent() {
    let mut store = ProgressStore::with_clock(MemoryKv::new(), FixedClock::new(base_date()));
    store.complete_day(8).unwrap();
    store.reset_progress();
    store.reset_progress();
    assert_eq!(store.load(), &ProgressState::default());
}

proptest! {
    #[test]
    fn streak_follows_gap(gap in 0i64..400, streak in 1u32..1000) {
        let today = base_date();
        let mut store = seeded_store(Some(today - Duration::days(gap)), streak, today);
        let after = store.complete_day(3).unwrap().streak;
        let expected = match gap {
            0 => streak,
            1 => streak + 1,
            _ => 1,
        };
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn completion_is_idempotent_on_days(days in proptest::collection::vec(1u8..=37, 1..60)) {
        let mut store = ProgressStore::with_clock(MemoryKv::new(), FixedClock::new(base_date()));
        for &day in &days {
            store.complete_day(day).unwrap();
        }
        let mut unique = days.clone();
        unique.sort_unstable();
        unique.dedup();
        let recorded: Vec<u8> = store.state().completed_days.iter().copied().collect();
        prop_assert_eq!(recorded, unique);
        prop_assert_eq!(store.state().streak, 1);
    }
}
