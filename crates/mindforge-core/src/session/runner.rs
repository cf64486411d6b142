//! Session runner.
//!
//! Drives one day's session over a virtual-clock [`TimerWheel`]. Nothing
//! runs on its own thread: the owner feeds elapsed wall-clock time through
//! [`SessionRunner::elapse`] (or calls [`SessionRunner::tick`] directly) and
//! drains the resulting events.
//!
//! ## Timers
//!
//! ```text
//! countdown   repeating, every countdown_interval_ms   -> tick()
//! breath      repeating, every breath_phase_ms         -> in -> hold -> out
//! drill       one slot: reveal (repeating) | settle (once) | result (once)
//! ```
//!
//! Every step change, pause and exit cancels the timers it owns. A fired
//! timer whose handle no longer matches the live slot is dropped.

use chrono::Utc;
use serde::Serialize;

use super::breathing::BreathPhase;
use super::drill::{DigitOutcome, DigitSource, Drill, DrillPhase};
use crate::error::ValidationError;
use crate::events::Event;
use crate::program::{ProgramDay, Step, StepType};
use crate::progress::{Clock, ProgressStore};
use crate::scheduler::{Fired, TimerHandle, TimerWheel};
use crate::storage::{KvStore, SessionConfig};

/// Receives the completed day when a session finishes.
pub trait DayCompletion {
    fn complete_day(&mut self, day: u8);
}

impl<K: KvStore, C: Clock> DayCompletion for ProgressStore<K, C> {
    fn complete_day(&mut self, day: u8) {
        if let Err(e) = ProgressStore::complete_day(self, day) {
            tracing::warn!("could not record completion of day {day}: {e}");
        }
    }
}

/// Ephemeral state of a running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRunState {
    pub day: ProgramDay,
    pub step_index: usize,
    pub remaining_secs: u64,
    pub paused: bool,
}

/// Result of [`SessionRunner::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the step at this index.
    Step(usize),
    /// The last step was done; the day has been recorded.
    Completed { day: u8 },
    /// The session had already ended.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTimer {
    Countdown,
    Breath,
    DrillReveal,
    DrillSettle,
    DrillResult,
}

#[derive(Debug, Default)]
struct Slots {
    countdown: Option<TimerHandle>,
    breath: Option<TimerHandle>,
    drill: Option<TimerHandle>,
}

pub struct SessionRunner {
    state: SessionRunState,
    timing: SessionConfig,
    wheel: TimerWheel<SessionTimer>,
    slots: Slots,
    digits: Box<dyn DigitSource>,
    breath: Option<BreathPhase>,
    drill: Option<Drill>,
    finished: bool,
    outbox: Vec<Event>,
}

impl SessionRunner {
    /// Begin `day` at its first step.
    pub fn start(day: ProgramDay, timing: SessionConfig, digits: Box<dyn DigitSource>) -> Self {
        let mut runner = Self {
            state: SessionRunState {
                day,
                step_index: 0,
                remaining_secs: 0,
                paused: false,
            },
            timing,
            wheel: TimerWheel::new(),
            slots: Slots::default(),
            digits,
            breath: None,
            drill: None,
            finished: false,
            outbox: Vec::new(),
        };
        tracing::info!(day = day.day, steps = day.steps.len(), "session started");
        runner.outbox.push(Event::SessionStarted {
            day: day.day,
            step_count: day.steps.len(),
            at: Utc::now(),
        });
        runner.enter_step(0);
        runner
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &SessionRunState {
        &self.state
    }

    pub fn day(&self) -> &ProgramDay {
        &self.state.day
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// True once the session completed or was exited.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.state.day.steps.get(self.state.step_index)
    }

    pub fn is_last_step(&self) -> bool {
        self.state.step_index >= self.state.day.last_step_index()
    }

    /// 1-based position and step count, for "step i of n".
    pub fn position(&self) -> (usize, usize) {
        (self.state.step_index + 1, self.state.day.steps.len())
    }

    pub fn breath_phase(&self) -> Option<BreathPhase> {
        self.breath
    }

    pub fn drill(&self) -> Option<&Drill> {
        self.drill.as_ref()
    }

    /// 0 .. 100 progress within the current step.
    pub fn step_progress_pct(&self) -> f64 {
        let total = self.current_step().map(Step::duration_secs).unwrap_or(0);
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.state.remaining_secs);
        elapsed as f64 / total as f64 * 100.0
    }

    /// Remaining time as `m:ss`.
    pub fn formatted_remaining(&self) -> String {
        format_clock(self.state.remaining_secs)
    }

    /// Virtual milliseconds fed through [`SessionRunner::elapse`] so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.wheel.now_ms()
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// One countdown second. Saturates at zero and never advances the step.
    pub fn tick(&mut self) {
        if self.finished || self.state.paused || self.state.remaining_secs == 0 {
            return;
        }
        self.state.remaining_secs -= 1;
        if self.state.remaining_secs == 0 {
            tracing::debug!(step = self.state.step_index, "countdown finished");
            self.outbox.push(Event::CountdownFinished {
                step_index: self.state.step_index,
                at: Utc::now(),
            });
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.finished {
            return;
        }
        self.state.paused = !self.state.paused;
        if self.state.paused {
            self.cancel_timers();
            self.outbox.push(Event::Paused {
                remaining_secs: self.state.remaining_secs,
                at: Utc::now(),
            });
        } else {
            if self.breath.is_some() {
                self.breath = Some(BreathPhase::In);
            }
            self.arm_timers();
            self.outbox.push(Event::Resumed {
                remaining_secs: self.state.remaining_secs,
                at: Utc::now(),
            });
        }
    }

    /// Move to the next step, or finish the session on the last one.
    ///
    /// Completion is reported to `progress` exactly once; afterwards the
    /// runner is inert.
    pub fn advance(&mut self, progress: &mut dyn DayCompletion) -> Advance {
        if self.finished {
            return Advance::Finished;
        }
        if !self.is_last_step() {
            let next = self.state.step_index + 1;
            self.enter_step(next);
            return Advance::Step(next);
        }

        let day = self.state.day.day;
        self.finish();
        progress.complete_day(day);
        tracing::info!(day, "session completed");
        self.outbox.push(Event::SessionCompleted { day, at: Utc::now() });
        Advance::Completed { day }
    }

    /// Abandon the session without recording anything.
    pub fn exit(&mut self) {
        if self.finished {
            return;
        }
        self.finish();
        tracing::info!(day = self.state.day.day, step = self.state.step_index, "session exited");
        self.outbox.push(Event::SessionExited {
            day: self.state.day.day,
            step_index: self.state.step_index,
            at: Utc::now(),
        });
    }

    /// Forward a digit tap to the current drill.
    ///
    /// Taps on steps without a drill are ignored.
    ///
    /// # Errors
    /// Returns an error if `digit` is outside 1..=9.
    pub fn input_digit(&mut self, digit: u8) -> Result<DigitOutcome, ValidationError> {
        if self.finished {
            return Ok(DigitOutcome::Ignored);
        }
        let Some(drill) = self.drill.as_mut() else {
            return Ok(DigitOutcome::Ignored);
        };
        let outcome = drill.enter_digit(digit)?;
        if let DigitOutcome::Judged { correct } = outcome {
            let event = Event::DrillJudged {
                correct,
                sequence: drill.sequence().to_vec(),
                input: drill.input().to_vec(),
                at: Utc::now(),
            };
            tracing::debug!(correct, "drill judged");
            self.outbox.push(event);
            if !self.state.paused {
                self.arm_drill_timer();
            }
        }
        Ok(outcome)
    }

    /// Feed `elapsed_ms` of wall-clock time through the timers.
    pub fn elapse(&mut self, elapsed_ms: u64) {
        let deadline = self.wheel.now_ms().saturating_add(elapsed_ms);
        while let Some(fired) = self.wheel.pop_due(deadline) {
            self.on_timer(fired);
        }
        self.wheel.settle(deadline);
    }

    // ── Internals ────────────────────────────────────────────────────

    fn enter_step(&mut self, index: usize) {
        self.cancel_timers();
        let Some(step) = self.state.day.steps.get(index).copied() else {
            return;
        };
        self.state.step_index = index;
        self.state.remaining_secs = step.duration_secs();
        self.state.paused = false;
        self.breath = (step.step_type == StepType::Breathing).then_some(BreathPhase::In);
        self.drill = step
            .step_type
            .has_drill()
            .then(|| Drill::new(step.step_type, step.difficulty(), self.digits.as_mut()));

        tracing::debug!(index, step_type = ?step.step_type, "step started");
        self.outbox.push(Event::StepStarted {
            day: self.state.day.day,
            step_index: index,
            step_type: step.step_type,
            duration_secs: step.duration_secs(),
            at: Utc::now(),
        });
        self.arm_timers();
    }

    fn finish(&mut self) {
        self.cancel_timers();
        self.finished = true;
        self.drill = None;
        self.breath = None;
    }

    fn cancel_timers(&mut self) {
        for handle in [
            self.slots.countdown.take(),
            self.slots.breath.take(),
            self.slots.drill.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.wheel.cancel(handle);
        }
        tracing::trace!(pending = self.wheel.pending(), "session timers cancelled");
    }

    fn arm_timers(&mut self) {
        self.slots.countdown = Some(
            self.wheel
                .schedule_repeating(self.timing.countdown_interval_ms, SessionTimer::Countdown),
        );
        if let Some(phase) = self.breath {
            self.slots.breath = Some(
                self.wheel
                    .schedule_repeating(self.timing.breath_phase_ms, SessionTimer::Breath),
            );
            self.outbox.push(Event::BreathPhaseChanged {
                phase,
                at: Utc::now(),
            });
        }
        self.arm_drill_timer();
    }

    /// Arm whichever drill timer the current drill phase waits on.
    fn arm_drill_timer(&mut self) {
        if let Some(handle) = self.slots.drill.take() {
            self.wheel.cancel(handle);
        }
        let Some(drill) = &self.drill else {
            return;
        };
        let handle = match drill.phase() {
            DrillPhase::Show { .. } if drill.all_revealed() => self
                .wheel
                .schedule_once(self.timing.reveal_settle_ms, SessionTimer::DrillSettle),
            DrillPhase::Show { .. } => self
                .wheel
                .schedule_repeating(self.timing.reveal_interval_ms, SessionTimer::DrillReveal),
            DrillPhase::Result { .. } => self
                .wheel
                .schedule_once(self.timing.result_display_ms, SessionTimer::DrillResult),
            DrillPhase::Input => return,
        };
        self.slots.drill = Some(handle);
    }

    fn is_live(&self, fired: &Fired<SessionTimer>) -> bool {
        let slot = match fired.payload {
            SessionTimer::Countdown => self.slots.countdown,
            SessionTimer::Breath => self.slots.breath,
            SessionTimer::DrillReveal | SessionTimer::DrillSettle | SessionTimer::DrillResult => {
                self.slots.drill
            }
        };
        slot == Some(fired.handle)
    }

    fn on_timer(&mut self, fired: Fired<SessionTimer>) {
        if !self.is_live(&fired) {
            tracing::trace!(payload = ?fired.payload, "stale timer dropped");
            return;
        }
        match fired.payload {
            SessionTimer::Countdown => self.tick(),
            SessionTimer::Breath => {
                if let Some(phase) = self.breath.map(BreathPhase::next) {
                    self.breath = Some(phase);
                    self.outbox.push(Event::BreathPhaseChanged {
                        phase,
                        at: Utc::now(),
                    });
                }
            }
            SessionTimer::DrillReveal => {
                let Some(drill) = self.drill.as_mut() else {
                    return;
                };
                if let Some((position, digit)) = drill.reveal_next() {
                    self.outbox.push(Event::DigitRevealed {
                        position,
                        digit,
                        at: Utc::now(),
                    });
                }
                if drill.all_revealed() {
                    self.arm_drill_timer();
                }
            }
            SessionTimer::DrillSettle => {
                self.slots.drill = None;
                if let Some(drill) = self.drill.as_mut() {
                    if drill.begin_input() {
                        self.outbox.push(Event::DrillPhaseChanged {
                            phase: drill.phase(),
                            at: Utc::now(),
                        });
                    }
                }
            }
            SessionTimer::DrillResult => {
                self.slots.drill = None;
                if let Some(drill) = self.drill.as_mut() {
                    drill.new_round(self.digits.as_mut());
                    self.outbox.push(Event::DrillPhaseChanged {
                        phase: drill.phase(),
                        at: Utc::now(),
                    });
                }
                self.arm_drill_timer();
            }
        }
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::session::ScriptedDigits;

    const BREATHE_REFLECT: &[Step] = &[
        Step::new(StepType::Breathing, 1),
        Step::new(StepType::Reflection, 1),
    ];
    const MEMORY_ONLY: &[Step] = &[Step::with_difficulty(StepType::Memory, 2, 1)];

    fn day(steps: &'static [Step]) -> ProgramDay {
        ProgramDay {
            day: 9,
            focus_key: "focusRoutine",
            steps,
        }
    }

    fn runner(steps: &'static [Step], digits: &[u8]) -> SessionRunner {
        SessionRunner::start(
            day(steps),
            SessionConfig::default(),
            Box::new(ScriptedDigits::new(digits.to_vec())),
        )
    }

    #[derive(Default)]
    struct Recorder(Vec<u8>);

    impl DayCompletion for Recorder {
        fn complete_day(&mut self, day: u8) {
            self.0.push(day);
        }
    }

    #[test]
    fn starts_at_first_step() {
        let r = runner(BREATHE_REFLECT, &[1]);
        assert_eq!(
            r.state(),
            &SessionRunState {
                day: day(BREATHE_REFLECT),
                step_index: 0,
                remaining_secs: 60,
                paused: false,
            }
        );
        assert_eq!(r.breath_phase(), Some(BreathPhase::In));
        assert!(r.drill().is_none());
        assert_eq!(r.position(), (1, 2));
    }

    #[test]
    fn two_advances_complete_exactly_once() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        let mut progress = Recorder::default();
        assert_eq!(r.advance(&mut progress), Advance::Step(1));
        assert_eq!(r.breath_phase(), None);
        assert_eq!(r.advance(&mut progress), Advance::Completed { day: 9 });
        assert!(r.is_finished());
        assert_eq!(r.advance(&mut progress), Advance::Finished);
        assert_eq!(progress.0, vec![9]);
    }

    #[test]
    fn countdown_saturates_at_zero() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        for _ in 0..60 {
            r.tick();
        }
        assert_eq!(r.remaining_secs(), 0);
        r.tick();
        assert_eq!(r.remaining_secs(), 0);
        assert_eq!(r.step_index(), 0);
        let finished = r
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, Event::CountdownFinished { .. }))
            .count();
        assert_eq!(finished, 1);
    }

    #[test]
    fn elapse_drives_the_countdown() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        r.elapse(10_500);
        assert_eq!(r.remaining_secs(), 50);
        r.elapse(120_000);
        assert_eq!(r.remaining_secs(), 0);
    }

    #[test]
    fn pause_freezes_countdown_and_breathing() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        r.elapse(5_000);
        assert_eq!(r.breath_phase(), Some(BreathPhase::Hold));
        r.toggle_pause();
        r.tick();
        r.elapse(30_000);
        assert_eq!(r.remaining_secs(), 55);
        r.toggle_pause();
        assert_eq!(r.breath_phase(), Some(BreathPhase::In));
        r.elapse(4_000);
        assert_eq!(r.remaining_secs(), 51);
        assert_eq!(r.breath_phase(), Some(BreathPhase::Hold));
    }

    #[test]
    fn advancing_resets_pause_and_countdown() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        r.elapse(20_000);
        r.toggle_pause();
        r.advance(&mut Recorder::default());
        assert!(!r.is_paused());
        assert_eq!(r.remaining_secs(), 60);
        r.elapse(1_000);
        assert_eq!(r.remaining_secs(), 59);
    }

    #[test]
    fn old_step_timers_do_not_leak_into_next_step() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        r.elapse(900);
        r.advance(&mut Recorder::default());
        r.elapse(999);
        assert_eq!(r.remaining_secs(), 60);
        r.elapse(1);
        assert_eq!(r.remaining_secs(), 59);
    }

    #[test]
    fn drill_reveals_then_accepts_input() {
        let mut r = runner(MEMORY_ONLY, &[3, 7, 2, 5]);
        assert_eq!(r.drill().unwrap().sequence(), &[3, 7, 2, 5]);
        r.elapse(1_000);
        assert_eq!(r.drill().unwrap().visible(), &[3]);
        r.elapse(3_000);
        assert!(r.drill().unwrap().all_revealed());
        r.elapse(499);
        assert!(matches!(r.drill().unwrap().phase(), DrillPhase::Show { .. }));
        r.elapse(1);
        assert_eq!(r.drill().unwrap().phase(), DrillPhase::Input);

        for d in [3, 7, 2] {
            assert_eq!(r.input_digit(d).unwrap(), DigitOutcome::Accepted);
        }
        assert_eq!(
            r.input_digit(5).unwrap(),
            DigitOutcome::Judged { correct: true }
        );
    }

    #[test]
    fn result_is_followed_by_a_new_round() {
        let mut r = runner(MEMORY_ONLY, &[1, 2, 3, 4, 9, 8, 7, 6]);
        r.elapse(4_500);
        for d in [1, 2, 3, 3] {
            r.input_digit(d).unwrap();
        }
        assert_eq!(
            r.drill().unwrap().phase(),
            DrillPhase::Result { correct: false }
        );
        r.elapse(2_000);
        let drill = r.drill().unwrap();
        assert_eq!(drill.phase(), DrillPhase::Show { revealed: 0 });
        assert_eq!(drill.sequence(), &[9, 8, 7, 6]);
        r.elapse(1_000);
        assert_eq!(r.drill().unwrap().visible(), &[9]);
    }

    #[test]
    fn pause_during_result_restarts_its_display_on_resume() {
        let mut r = runner(MEMORY_ONLY, &[1, 2, 3, 4, 9, 8, 7, 6]);
        r.elapse(4_500);
        for d in [1, 2, 3, 4] {
            r.input_digit(d).unwrap();
        }
        r.elapse(1_500);
        r.toggle_pause();
        r.elapse(10_000);
        assert_eq!(
            r.drill().unwrap().phase(),
            DrillPhase::Result { correct: true }
        );

        r.toggle_pause();
        r.elapse(1_999);
        assert_eq!(
            r.drill().unwrap().phase(),
            DrillPhase::Result { correct: true }
        );
        r.elapse(1);
        let drill = r.drill().unwrap();
        assert_eq!(drill.phase(), DrillPhase::Show { revealed: 0 });
        assert_eq!(drill.sequence(), &[9, 8, 7, 6]);
    }

    #[test]
    fn result_judged_while_paused_waits_for_resume() {
        let mut r = runner(MEMORY_ONLY, &[1, 2, 3, 4, 9, 8, 7, 6]);
        r.elapse(4_500);
        r.toggle_pause();
        for d in [1, 2, 3, 3] {
            r.input_digit(d).unwrap();
        }
        r.elapse(5_000);
        assert_eq!(
            r.drill().unwrap().phase(),
            DrillPhase::Result { correct: false }
        );
        r.toggle_pause();
        r.elapse(2_000);
        assert_eq!(r.drill().unwrap().phase(), DrillPhase::Show { revealed: 0 });
    }

    #[test]
    fn pause_suspends_reveal() {
        let mut r = runner(MEMORY_ONLY, &[3, 7, 2, 5]);
        r.elapse(1_500);
        assert_eq!(r.drill().unwrap().visible(), &[3]);
        r.toggle_pause();
        r.elapse(10_000);
        assert_eq!(r.drill().unwrap().visible(), &[3]);
        r.toggle_pause();
        r.elapse(999);
        assert_eq!(r.drill().unwrap().visible(), &[3]);
        r.elapse(1);
        assert_eq!(r.drill().unwrap().visible(), &[3, 7]);
    }

    #[test]
    fn exit_records_nothing_and_stops_timers() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        r.exit();
        r.elapse(10_000);
        assert_eq!(r.remaining_secs(), 60);
        assert!(r.is_finished());
        let mut progress = Recorder::default();
        assert_eq!(r.advance(&mut progress), Advance::Finished);
        assert!(progress.0.is_empty());
        assert!(matches!(
            r.drain_events().last(),
            Some(Event::SessionExited { day: 9, step_index: 0, .. })
        ));
    }

    #[test]
    fn digits_on_non_drill_steps_are_ignored() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        assert_eq!(r.input_digit(4).unwrap(), DigitOutcome::Ignored);
        assert!(r.input_digit(0).is_ok());
    }

    #[test]
    fn progress_and_clock_formatting() {
        let mut r = runner(BREATHE_REFLECT, &[1]);
        assert_eq!(r.formatted_remaining(), "1:00");
        r.elapse(15_000);
        assert_eq!(r.formatted_remaining(), "0:45");
        assert!((r.step_progress_pct() - 25.0).abs() < f64::EPSILON);
        assert_eq!(format_clock(605), "10:05");
        assert_eq!(format_clock(0), "0:00");
    }

    proptest! {
        #[test]
        fn countdown_never_underflows(ticks in 0usize..200) {
            let mut r = runner(BREATHE_REFLECT, &[1]);
            for _ in 0..ticks {
                r.tick();
            }
            prop_assert_eq!(r.remaining_secs(), 60u64.saturating_sub(ticks as u64));
        }
    }
}
