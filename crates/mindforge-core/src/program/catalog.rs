//! Built-in program tables.
//!
//! The main program covers days 1-30, the maintenance program days 31-37
//! (shown to users as M1..M7). Every session adds up to 15 minutes.

use serde::Serialize;

use super::step::{Step, StepType};

/// Last day of the main program.
pub const MAIN_PROGRAM_DAYS: u8 = 30;
/// Last addressable day (main + maintenance).
pub const LAST_DAY: u8 = 37;

/// One day of the program: its focus and ordered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDay {
    pub day: u8,
    pub focus_key: &'static str,
    pub steps: &'static [Step],
}

impl ProgramDay {
    pub fn is_maintenance(&self) -> bool {
        self.day > MAIN_PROGRAM_DAYS
    }

    /// User-facing day label: `5` for main days, `M3` for maintenance days.
    pub fn label(&self) -> String {
        day_label(self.day)
    }

    pub fn total_minutes(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_minutes).sum()
    }

    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Label a day number the way the day picker shows it.
pub fn day_label(day: u8) -> String {
    if day > MAIN_PROGRAM_DAYS {
        format!("M{}", day - MAIN_PROGRAM_DAYS)
    } else {
        day.to_string()
    }
}

/// Immutable day -> program lookup over a main and a maintenance table.
#[derive(Debug, Clone, Copy)]
pub struct ProgramCatalog {
    main: &'static [ProgramDay],
    maintenance: &'static [ProgramDay],
}

impl ProgramCatalog {
    /// The shipped 30 + 7 day program.
    pub const fn builtin() -> Self {
        Self {
            main: MAIN_PROGRAM,
            maintenance: MAINTENANCE_PROGRAM,
        }
    }

    /// A catalog over caller-supplied tables. Both tables must be non-empty.
    pub const fn from_tables(main: &'static [ProgramDay], maintenance: &'static [ProgramDay]) -> Self {
        assert!(!main.is_empty() && !maintenance.is_empty());
        Self { main, maintenance }
    }

    /// Resolve a day. Days up to 30 come from the main table, later days
    /// from the maintenance table; a day missing from its table falls back
    /// to that table's first entry.
    pub fn lookup(&self, day: u8) -> ProgramDay {
        let table = if day <= MAIN_PROGRAM_DAYS {
            self.main
        } else {
            self.maintenance
        };
        table
            .iter()
            .find(|d| d.day == day)
            .copied()
            .unwrap_or(table[0])
    }

    pub fn main_days(&self) -> &'static [ProgramDay] {
        self.main
    }

    pub fn maintenance_days(&self) -> &'static [ProgramDay] {
        self.maintenance
    }
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

use StepType::{Breathing, Memory, Recall, Reflection};

const fn drill(step_type: StepType, minutes: u32, difficulty: u8) -> Step {
    Step::with_difficulty(step_type, minutes, difficulty)
}

// Week 1: settle in, short sequences.
const FOUNDATION_A: &[Step] = &[
    Step::new(Breathing, 3),
    drill(Memory, 5, 1),
    drill(Recall, 4, 1),
    Step::new(Reflection, 3),
];
const FOUNDATION_B: &[Step] = &[
    Step::new(Breathing, 3),
    drill(Recall, 5, 1),
    drill(Memory, 4, 1),
    Step::new(Reflection, 3),
];

// Week 2.
const BUILD_A: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 5, 2),
    drill(Recall, 5, 2),
    Step::new(Reflection, 3),
];
const BUILD_B: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 6, 2),
    drill(Recall, 4, 2),
    Step::new(Reflection, 3),
];

// Week 3.
const STRETCH_A: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 6, 3),
    drill(Recall, 5, 3),
    Step::new(Reflection, 2),
];
const STRETCH_B: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Recall, 6, 3),
    drill(Memory, 5, 3),
    Step::new(Reflection, 2),
];

// Week 4.
const DEEPEN_A: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 6, 4),
    drill(Recall, 5, 4),
    Step::new(Reflection, 2),
];
const DEEPEN_B: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 4, 4),
    drill(Recall, 4, 4),
    drill(Memory, 3, 4),
    Step::new(Reflection, 2),
];

// Days 29-30.
const MASTERY: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 6, 5),
    drill(Recall, 5, 5),
    Step::new(Reflection, 2),
];

const MAINTAIN_A: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 5, 3),
    drill(Recall, 5, 3),
    Step::new(Reflection, 3),
];
const MAINTAIN_B: &[Step] = &[
    Step::new(Breathing, 2),
    drill(Memory, 5, 4),
    drill(Recall, 5, 4),
    Step::new(Reflection, 3),
];

const fn program_day(day: u8, focus_key: &'static str, steps: &'static [Step]) -> ProgramDay {
    ProgramDay {
        day,
        focus_key,
        steps,
    }
}

pub(crate) static MAIN_PROGRAM: &[ProgramDay] = &[
    program_day(1, "focusCalmStart", FOUNDATION_A),
    program_day(2, "focusAttention", FOUNDATION_B),
    program_day(3, "focusShortSequences", FOUNDATION_A),
    program_day(4, "focusAttention", FOUNDATION_B),
    program_day(5, "focusShortSequences", FOUNDATION_A),
    program_day(6, "focusRoutine", FOUNDATION_B),
    program_day(7, "focusReview", FOUNDATION_A),
    program_day(8, "focusLongerSequences", BUILD_A),
    program_day(9, "focusRetrieval", BUILD_B),
    program_day(10, "focusLongerSequences", BUILD_A),
    program_day(11, "focusRetrieval", BUILD_B),
    program_day(12, "focusRoutine", BUILD_A),
    program_day(13, "focusLongerSequences", BUILD_B),
    program_day(14, "focusReview", BUILD_A),
    program_day(15, "focusCapacity", STRETCH_A),
    program_day(16, "focusRetrieval", STRETCH_B),
    program_day(17, "focusCapacity", STRETCH_A),
    program_day(18, "focusCalmUnderLoad", STRETCH_B),
    program_day(19, "focusCapacity", STRETCH_A),
    program_day(20, "focusRetrieval", STRETCH_B),
    program_day(21, "focusReview", STRETCH_A),
    program_day(22, "focusDepth", DEEPEN_A),
    program_day(23, "focusCalmUnderLoad", DEEPEN_B),
    program_day(24, "focusDepth", DEEPEN_A),
    program_day(25, "focusRetrieval", DEEPEN_B),
    program_day(26, "focusDepth", DEEPEN_A),
    program_day(27, "focusCalmUnderLoad", DEEPEN_B),
    program_day(28, "focusReview", DEEPEN_A),
    program_day(29, "focusMastery", MASTERY),
    program_day(30, "focusMastery", MASTERY),
];

pub(crate) static MAINTENANCE_PROGRAM: &[ProgramDay] = &[
    program_day(31, "focusMaintain", MAINTAIN_A),
    program_day(32, "focusMaintain", MAINTAIN_B),
    program_day(33, "focusMaintain", MAINTAIN_A),
    program_day(34, "focusMaintain", MAINTAIN_B),
    program_day(35, "focusMaintain", MAINTAIN_A),
    program_day(36, "focusMaintain", MAINTAIN_B),
    program_day(37, "focusMaintain", MAINTAIN_A),
];
