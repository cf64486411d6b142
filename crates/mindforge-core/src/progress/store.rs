//! Persisted progress record.
//!
//! Every mutation writes the full record back. Storage trouble never
//! reaches the caller: missing or malformed records are replaced by the
//! default state, a failed read yields the defaults in memory only, and
//! failed writes are logged while the in-memory state stays authoritative.

use super::clock::{Clock, SystemClock};
use super::state::{ProgressState, StreakChange};
use crate::error::ValidationError;
use crate::program::LAST_DAY;
use crate::storage::KvStore;

/// Key of the progress record in the kv store.
pub const PROGRESS_KEY: &str = "mindforge-progress";

/// Outcome of reading the stored record.
enum Record {
    Valid(ProgressState),
    /// Absent, malformed or out of range; safe to overwrite.
    Replace,
    /// The store failed the read; the stored bytes are left alone.
    Unreadable,
}

/// Owner of the progress record and its storage.
pub struct ProgressStore<K: KvStore, C: Clock = SystemClock> {
    kv: K,
    clock: C,
    state: ProgressState,
}

impl<K: KvStore> ProgressStore<K, SystemClock> {
    /// Open over `kv` using the system calendar date.
    pub fn open(kv: K) -> Self {
        Self::with_clock(kv, SystemClock)
    }
}

impl<K: KvStore, C: Clock> ProgressStore<K, C> {
    /// Open over `kv` with an explicit clock and load the stored record.
    pub fn with_clock(kv: K, clock: C) -> Self {
        let mut store = Self {
            kv,
            clock,
            state: ProgressState::default(),
        };
        store.load();
        store
    }

    /// Re-read the persisted record.
    ///
    /// Missing, malformed or out-of-range data yields the default state,
    /// which is written back so the next read is clean. When the store
    /// itself fails the read, the defaults are used without touching it.
    pub fn load(&mut self) -> &ProgressState {
        match self.read_record() {
            Record::Valid(state) => self.state = state,
            Record::Replace => {
                self.state = ProgressState::default();
                self.persist();
            }
            Record::Unreadable => self.state = ProgressState::default(),
        }
        &self.state
    }

    fn read_record(&self) -> Record {
        let raw = match self.kv.get(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no progress record, starting fresh");
                return Record::Replace;
            }
            Err(e) => {
                tracing::warn!("progress record unreadable, using defaults: {e}");
                return Record::Unreadable;
            }
        };
        match serde_json::from_str::<ProgressState>(&raw) {
            Ok(state) if state.is_valid() => Record::Valid(state),
            Ok(_) => {
                tracing::warn!("progress record out of range, using defaults");
                Record::Replace
            }
            Err(e) => {
                tracing::warn!("progress record malformed, using defaults: {e}");
                Record::Replace
            }
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("could not serialize progress: {e}");
                return;
            }
        };
        if let Err(e) = self.kv.set(PROGRESS_KEY, &json) {
            tracing::warn!("could not persist progress: {e}");
        }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_maintenance_mode(&self) -> bool {
        self.state.is_maintenance_mode()
    }

    /// Record the day the user should resume at.
    ///
    /// # Errors
    /// Returns an error if `day` is outside 1..=37.
    pub fn set_current_day(&mut self, day: u8) -> Result<&ProgressState, ValidationError> {
        check_day(day)?;
        self.state.current_day = day;
        self.persist();
        Ok(&self.state)
    }

    /// Mark `day` completed today, update the streak, and move the resume
    /// point to the following day.
    ///
    /// # Errors
    /// Returns an error if `day` is outside 1..=37.
    pub fn complete_day(&mut self, day: u8) -> Result<&ProgressState, ValidationError> {
        check_day(day)?;
        let today = self.clock.today();
        let change = self.state.record_completion(day, today);
        match change {
            StreakChange::Unchanged => {
                tracing::info!(day, streak = self.state.streak, "day completed, streak unchanged")
            }
            _ => tracing::info!(day, streak = self.state.streak, ?change, "day completed"),
        }
        self.persist();
        Ok(&self.state)
    }

    /// Forget all progress and drop the persisted record.
    pub fn reset_progress(&mut self) -> &ProgressState {
        self.state = ProgressState::default();
        if let Err(e) = self.kv.remove(PROGRESS_KEY) {
            tracing::warn!("could not remove progress record: {e}");
        }
        tracing::info!("progress reset");
        &self.state
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn kv_mut(&mut self) -> &mut K {
        &mut self.kv
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_inner(self) -> K {
        self.kv
    }
}

fn check_day(day: u8) -> Result<(), ValidationError> {
    if (1..=LAST_DAY).contains(&day) {
        Ok(())
    } else {
        Err(ValidationError::DayOutOfRange {
            day: u32::from(day),
            max: LAST_DAY,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use super::*;
    use crate::error::DatabaseError;
    use crate::progress::FixedClock;
    use crate::storage::MemoryKv;

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
    }

    #[test]
    fn fresh_store_persists_defaults() {
        let store = ProgressStore::with_clock(MemoryKv::new(), clock());
        assert_eq!(store.state(), &ProgressState::default());
        let raw = store.kv().get(PROGRESS_KEY).unwrap().unwrap();
        assert_eq!(serde_json::from_str::<ProgressState>(&raw).unwrap(), ProgressState::default());
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        let mut kv = MemoryKv::new();
        kv.set(PROGRESS_KEY, "{not json").unwrap();
        let store = ProgressStore::with_clock(kv, clock());
        assert_eq!(store.state(), &ProgressState::default());
        assert_eq!(
            store.kv().get(PROGRESS_KEY).unwrap().as_deref(),
            Some(r#"{"currentDay":1,"completedDays":[],"lastSessionDate":null,"streak":0}"#)
        );
    }

    #[test]
    fn out_of_range_record_falls_back_to_defaults() {
        let records = [
            r#"{"currentDay":3,"completedDays":[1,99],"lastSessionDate":null,"streak":1}"#,
            r#"{"currentDay":2,"completedDays":[1],"lastSessionDate":"2026-03-10","streak":0}"#,
            r#"{"currentDay":1,"completedDays":[],"lastSessionDate":null,"streak":3}"#,
        ];
        for record in records {
            let mut kv = MemoryKv::new();
            kv.set(PROGRESS_KEY, record).unwrap();
            let mut store = ProgressStore::with_clock(kv, clock());
            assert_eq!(store.state(), &ProgressState::default(), "{record}");

            store.complete_day(2).unwrap();
            assert_eq!(store.state().streak, 1);
        }
    }

    /// Kv whose first `failures` reads report a locked database.
    struct FlakyKv {
        inner: MemoryKv,
        failures: Cell<u32>,
    }

    impl KvStore for FlakyKv {
        fn get(&self, key: &str) -> crate::error::Result<Option<String>> {
            if self.failures.get() > 0 {
                self.failures.set(self.failures.get() - 1);
                return Err(DatabaseError::Locked.into());
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> crate::error::Result<()> {
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> crate::error::Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_read_keeps_stored_record() {
        let stored = r#"{"currentDay":12,"completedDays":[1,2,3,4,5,6,7,8,9,10,11],"lastSessionDate":"2026-03-09","streak":11}"#;
        let mut inner = MemoryKv::new();
        inner.set(PROGRESS_KEY, stored).unwrap();
        let kv = FlakyKv {
            inner,
            failures: Cell::new(1),
        };

        let mut store = ProgressStore::with_clock(kv, clock());
        assert_eq!(store.state(), &ProgressState::default());
        assert_eq!(store.kv().inner.get(PROGRESS_KEY).unwrap().as_deref(), Some(stored));

        let state = store.load();
        assert_eq!(state.current_day, 12);
        assert_eq!(state.streak, 11);
    }

    #[test]
    fn complete_day_is_idempotent_on_completed_days() {
        let mut store = ProgressStore::with_clock(MemoryKv::new(), clock());
        store.complete_day(4).unwrap();
        store.complete_day(4).unwrap();
        let state = store.state();
        assert_eq!(state.completed_days.iter().copied().collect::<Vec<_>>(), vec![4]);
        assert_eq!(state.streak, 1);
    }

    #[test]
    fn rejects_days_out_of_range() {
        let mut store = ProgressStore::with_clock(MemoryKv::new(), clock());
        assert!(store.complete_day(0).is_err());
        assert!(store.set_current_day(38).is_err());
        assert_eq!(store.state(), &ProgressState::default());
    }

    #[test]
    fn set_current_day_persists() {
        let mut store = ProgressStore::with_clock(MemoryKv::new(), clock());
        store.set_current_day(12).unwrap();
        let kv = store.into_inner();
        let reopened = ProgressStore::with_clock(kv, clock());
        assert_eq!(reopened.state().current_day, 12);
    }

    #[test]
    fn reset_then_load_is_default() {
        let mut store = ProgressStore::with_clock(MemoryKv::new(), clock());
        store.complete_day(1).unwrap();
        store.reset_progress();
        assert_eq!(store.kv().get(PROGRESS_KEY).unwrap(), None);
        assert_eq!(store.load(), &ProgressState::default());
    }
}
