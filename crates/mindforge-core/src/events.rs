use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::program::StepType;
use crate::session::{BreathPhase, DrillPhase};

/// Every session state change produces an Event.
/// Front ends render from them; the CLI prints them as JSON lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        day: u8,
        step_count: usize,
        at: DateTime<Utc>,
    },
    StepStarted {
        day: u8,
        step_index: usize,
        step_type: StepType,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    Paused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. The step stays current until advanced.
    CountdownFinished {
        step_index: usize,
        at: DateTime<Utc>,
    },
    BreathPhaseChanged {
        phase: BreathPhase,
        at: DateTime<Utc>,
    },
    DigitRevealed {
        position: usize,
        digit: u8,
        at: DateTime<Utc>,
    },
    DrillPhaseChanged {
        phase: DrillPhase,
        at: DateTime<Utc>,
    },
    DrillJudged {
        correct: bool,
        sequence: Vec<u8>,
        input: Vec<u8>,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        day: u8,
        at: DateTime<Utc>,
    },
    SessionExited {
        day: u8,
        step_index: usize,
        at: DateTime<Utc>,
    },
}
