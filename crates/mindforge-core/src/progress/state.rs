use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::program::{LAST_DAY, MAIN_PROGRAM_DAYS};

/// Number of completed days that unlocks the maintenance program.
pub const MAINTENANCE_THRESHOLD: usize = MAIN_PROGRAM_DAYS as usize;

/// Durable record of the user's advancement through the program.
///
/// Serialized with the field names `currentDay`, `completedDays`,
/// `lastSessionDate` (`YYYY-MM-DD`) and `streak`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub current_day: u8,
    pub completed_days: BTreeSet<u8>,
    pub last_session_date: Option<NaiveDate>,
    pub streak: u32,
}

/// How a completion moved the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First completion ever recorded.
    Started,
    /// Completion on the calendar day after the previous one.
    Extended,
    /// Gap of more than one day.
    Reset,
    /// Same calendar day (or a clock that went backwards).
    Unchanged,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            current_day: 1,
            completed_days: BTreeSet::new(),
            last_session_date: None,
            streak: 0,
        }
    }
}

impl ProgressState {
    /// True once the 30 main days (or any 30 days) are completed.
    pub fn is_maintenance_mode(&self) -> bool {
        self.completed_days.len() >= MAINTENANCE_THRESHOLD
    }

    /// Highest day the day picker offers.
    pub fn max_selectable_day(&self) -> u8 {
        if self.is_maintenance_mode() {
            LAST_DAY
        } else {
            MAIN_PROGRAM_DAYS
        }
    }

    pub fn is_completed(&self, day: u8) -> bool {
        self.completed_days.contains(&day)
    }

    /// Whether a parsed record satisfies the range invariants and has a
    /// zero streak exactly when nothing was ever completed.
    pub fn is_valid(&self) -> bool {
        let in_range = |d: u8| (1..=LAST_DAY).contains(&d);
        let never_completed = self.last_session_date.is_none() && self.completed_days.is_empty();
        in_range(self.current_day)
            && self.completed_days.iter().all(|&d| in_range(d))
            && (self.streak == 0) == never_completed
    }

    /// Apply one day completion on `today`.
    ///
    /// The streak is judged against the previous `last_session_date`:
    /// exactly one day later extends it, a longer gap restarts it at 1,
    /// and a completion on the same date leaves it as it was.
    pub fn record_completion(&mut self, day: u8, today: NaiveDate) -> StreakChange {
        self.completed_days.insert(day);

        let change = match self.last_session_date {
            None => {
                self.streak = 1;
                StreakChange::Started
            }
            Some(last) => {
                let diff_days = (today - last).num_days();
                if diff_days == 1 {
                    self.streak = self.streak.saturating_add(1);
                    StreakChange::Extended
                } else if diff_days > 1 {
                    self.streak = 1;
                    StreakChange::Reset
                } else {
                    StreakChange::Unchanged
                }
            }
        };

        self.last_session_date = Some(today);
        self.current_day = day.saturating_add(1).min(LAST_DAY);
        change
    }
}
