//! Digit-sequence drill played inside memory and recall steps.
//!
//! ```text
//! Show { revealed } --all revealed, settle--> Input --len reached--> Result --display--> Show { 0 }
//! ```
//!
//! The drill only holds state; the session runner owns the timers that
//! move it between phases.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::Serialize;

use crate::error::ValidationError;
use crate::program::StepType;

/// Digits always come from 1..=9.
pub const MIN_DIGIT: u8 = 1;
pub const MAX_DIGIT: u8 = 9;

/// Source of drill digits.
pub trait DigitSource {
    /// Next digit, uniformly from 1..=9.
    fn next_digit(&mut self) -> u8;
}

/// PCG-backed digit source.
#[derive(Debug, Clone)]
pub struct SeededDigits {
    rng: Mcg128Xsl64,
}

impl SeededDigits {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }
}

impl DigitSource for SeededDigits {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(MIN_DIGIT..=MAX_DIGIT)
    }
}

/// Replays a fixed list of digits, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDigits {
    digits: Vec<u8>,
    pos: usize,
}

impl ScriptedDigits {
    /// # Panics
    /// Panics if `digits` is empty or holds a value outside 1..=9.
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        let digits = digits.into();
        assert!(!digits.is_empty(), "scripted digits must not be empty");
        assert!(
            digits.iter().all(|d| (MIN_DIGIT..=MAX_DIGIT).contains(d)),
            "scripted digits must be in 1..=9"
        );
        Self { digits, pos: 0 }
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        let d = self.digits[self.pos % self.digits.len()];
        self.pos += 1;
        d
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DrillPhase {
    /// Digits are being revealed; `revealed` of them are visible.
    Show { revealed: usize },
    /// Waiting for the user to tap the sequence back.
    Input,
    /// The attempt has been judged.
    Result { correct: bool },
}

/// What happened to a tapped digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// Not in the input phase; the tap was dropped.
    Ignored,
    /// Appended; more digits expected.
    Accepted,
    /// Input reached the sequence length and was judged.
    Judged { correct: bool },
}

/// Exact element-wise match of input against the sequence.
pub fn judge(sequence: &[u8], input: &[u8]) -> bool {
    sequence.len() == input.len() && sequence.iter().zip(input).all(|(a, b)| a == b)
}

#[derive(Debug, Clone)]
pub struct Drill {
    step_type: StepType,
    difficulty: u8,
    sequence: Vec<u8>,
    input: Vec<u8>,
    phase: DrillPhase,
}

impl Drill {
    /// Sequence length for a difficulty: three digits plus one per level.
    pub fn sequence_len(difficulty: u8) -> usize {
        3 + usize::from(difficulty.max(1))
    }

    pub fn new(step_type: StepType, difficulty: u8, digits: &mut dyn DigitSource) -> Self {
        let mut drill = Self {
            step_type,
            difficulty: difficulty.max(1),
            sequence: Vec::new(),
            input: Vec::new(),
            phase: DrillPhase::Show { revealed: 0 },
        };
        drill.new_round(digits);
        drill
    }

    /// Draw a fresh sequence and return to the start of the show phase.
    pub fn new_round(&mut self, digits: &mut dyn DigitSource) {
        let len = Self::sequence_len(self.difficulty);
        self.sequence = (0..len).map(|_| digits.next_digit()).collect();
        self.input.clear();
        self.phase = DrillPhase::Show { revealed: 0 };
    }

    pub fn step_type(&self) -> StepType {
        self.step_type
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn phase(&self) -> DrillPhase {
        self.phase
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// The revealed prefix of the sequence while showing it.
    pub fn visible(&self) -> &[u8] {
        match self.phase {
            DrillPhase::Show { revealed } => &self.sequence[..revealed],
            _ => &[],
        }
    }

    pub fn all_revealed(&self) -> bool {
        matches!(self.phase, DrillPhase::Show { revealed } if revealed >= self.sequence.len())
    }

    /// Reveal one more digit. Returns its position and value.
    pub fn reveal_next(&mut self) -> Option<(usize, u8)> {
        match self.phase {
            DrillPhase::Show { revealed } if revealed < self.sequence.len() => {
                self.phase = DrillPhase::Show {
                    revealed: revealed + 1,
                };
                Some((revealed, self.sequence[revealed]))
            }
            _ => None,
        }
    }

    /// Leave the show phase once every digit has been revealed.
    pub fn begin_input(&mut self) -> bool {
        if self.all_revealed() {
            self.phase = DrillPhase::Input;
            true
        } else {
            false
        }
    }

    /// Record a tapped digit.
    ///
    /// # Errors
    /// Returns an error if `digit` is outside 1..=9.
    pub fn enter_digit(&mut self, digit: u8) -> Result<DigitOutcome, ValidationError> {
        if !(MIN_DIGIT..=MAX_DIGIT).contains(&digit) {
            return Err(ValidationError::DigitOutOfRange(digit));
        }
        if self.phase != DrillPhase::Input {
            return Ok(DigitOutcome::Ignored);
        }
        self.input.push(digit);
        if self.input.len() < self.sequence.len() {
            return Ok(DigitOutcome::Accepted);
        }
        let correct = judge(&self.sequence, &self.input);
        self.phase = DrillPhase::Result { correct };
        Ok(DigitOutcome::Judged { correct })
    }

    /// Translation key of the prompt shown for the current phase.
    pub fn prompt_key(&self) -> &'static str {
        match self.phase {
            DrillPhase::Show { .. } => "rememberSequence",
            DrillPhase::Input => "recallSequence",
            DrillPhase::Result { correct: true } => "correct",
            DrillPhase::Result { correct: false } => "tryAgain",
        }
    }
}
