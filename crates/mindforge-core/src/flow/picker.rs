use std::ops::RangeInclusive;

use super::machine::Action;
use crate::error::ValidationError;
use crate::progress::ProgressState;

/// Day picker cursor, restricted to the days the user may choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPicker {
    day: u8,
    max: u8,
}

impl DayPicker {
    /// Start at `current_day`, clamped into `1..=max`.
    pub fn new(current_day: u8, max: u8) -> Self {
        let max = max.max(1);
        Self {
            day: current_day.clamp(1, max),
            max,
        }
    }

    pub fn for_progress(progress: &ProgressState) -> Self {
        Self::new(progress.current_day, progress.max_selectable_day())
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn selectable_days(&self) -> RangeInclusive<u8> {
        1..=self.max
    }

    pub fn previous(&mut self) -> u8 {
        self.day = self.day.saturating_sub(1).max(1);
        self.day
    }

    pub fn next(&mut self) -> u8 {
        self.day = self.day.saturating_add(1).min(self.max);
        self.day
    }

    /// # Errors
    /// Returns an error if `day` is not selectable.
    pub fn pick(&mut self, day: u8) -> Result<u8, ValidationError> {
        if !self.selectable_days().contains(&day) {
            return Err(ValidationError::DayOutOfRange {
                day: u32::from(day),
                max: self.max,
            });
        }
        self.day = day;
        Ok(day)
    }

    pub fn confirm(&self) -> Action {
        Action::SelectDay(self.day)
    }
}
