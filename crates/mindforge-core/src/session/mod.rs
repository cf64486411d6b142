//! Running a day's session: step countdown, breathing guide, digit drills.

mod breathing;
mod drill;
mod runner;

pub use breathing::BreathPhase;
pub use drill::{
    judge, DigitOutcome, DigitSource, Drill, DrillPhase, ScriptedDigits, SeededDigits, MAX_DIGIT,
    MIN_DIGIT,
};
pub use runner::{format_clock, Advance, DayCompletion, SessionRunState, SessionRunner};
