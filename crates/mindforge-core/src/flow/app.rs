//! The application controller.
//!
//! `App` is the single owner of everything a front end touches: the
//! progress store, the language preference, the translator, timing
//! config and the running session. Front ends send it actions and session
//! controls and render from its queries.

use super::machine::{transition, Action, Effect, FlowContext, Screen};
use super::picker::DayPicker;
use crate::error::ValidationError;
use crate::events::Event;
use crate::i18n::{load_language, save_language, Language, Translator};
use crate::program::{ProgramCatalog, ProgramDay};
use crate::progress::{Clock, ProgressState, ProgressStore, SystemClock};
use crate::session::{Advance, DigitOutcome, DigitSource, SeededDigits, SessionRunner};
use crate::storage::{KvStore, SessionConfig};

pub struct App<K: KvStore, C: Clock = SystemClock> {
    progress: ProgressStore<K, C>,
    translator: Translator,
    catalog: ProgramCatalog,
    timing: SessionConfig,
    screen: Screen,
    session: Option<SessionRunner>,
    /// Events left behind by a runner that has been dropped.
    finished_events: Vec<Event>,
}

impl<K: KvStore> App<K, SystemClock> {
    pub fn open(kv: K, timing: SessionConfig) -> Self {
        Self::with_clock(kv, SystemClock, timing)
    }
}

impl<K: KvStore, C: Clock> App<K, C> {
    /// Load progress and language from `kv` and pick the opening screen.
    pub fn with_clock(kv: K, clock: C, timing: SessionConfig) -> Self {
        let progress = ProgressStore::with_clock(kv, clock);
        let language = load_language(progress.kv());
        Self {
            progress,
            translator: Translator::new(language),
            catalog: ProgramCatalog::builtin(),
            timing,
            screen: Screen::initial(language.is_some()),
            session: None,
            finished_events: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn progress(&self) -> &ProgressState {
        self.progress.state()
    }

    pub fn store(&self) -> &ProgressStore<K, C> {
        &self.progress
    }

    pub fn language(&self) -> Option<Language> {
        self.translator.language()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn session(&self) -> Option<&SessionRunner> {
        self.session.as_ref()
    }

    /// Program of the day the current screen is about.
    pub fn program_day(&self) -> Option<ProgramDay> {
        self.screen.day().map(|day| self.catalog.lookup(day))
    }

    pub fn day_picker(&self) -> DayPicker {
        DayPicker::for_progress(self.progress.state())
    }

    fn context(&self) -> FlowContext {
        FlowContext {
            max_selectable_day: self.progress.state().max_selectable_day(),
        }
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Run `action` through the screen machine and apply its effects.
    pub fn dispatch(&mut self, action: Action) -> Screen {
        let next = transition(&self.screen, action, &self.context());
        if next.screen == self.screen && next.effects.is_empty() {
            tracing::debug!(screen = ?self.screen, ?action, "action ignored");
            return self.screen;
        }
        for effect in next.effects {
            self.apply(effect);
        }
        if next.screen != self.screen {
            tracing::debug!(from = ?self.screen, to = ?next.screen, "screen changed");
        }
        self.screen = next.screen;
        self.screen
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::PersistLanguage(language) => {
                save_language(self.progress.kv_mut(), language);
                self.translator.set_language(language);
            }
            Effect::SetCurrentDay(day) => {
                if let Err(e) = self.progress.set_current_day(day) {
                    tracing::warn!("ignoring day change: {e}");
                }
            }
            Effect::StartSession(day) => {
                let program = self.catalog.lookup(day);
                self.session = Some(SessionRunner::start(
                    program,
                    self.timing.clone(),
                    self.digit_source(),
                ));
            }
            Effect::EndSession => {
                if let Some(mut runner) = self.session.take() {
                    runner.exit();
                    self.finished_events.extend(runner.drain_events());
                }
            }
            Effect::ResetProgress => {
                self.progress.reset_progress();
            }
        }
    }

    fn digit_source(&self) -> Box<dyn DigitSource> {
        match self.timing.drill_seed {
            Some(seed) => Box::new(SeededDigits::new(seed)),
            None => Box::new(SeededDigits::from_entropy()),
        }
    }

    // ── Session controls ─────────────────────────────────────────────

    pub fn toggle_pause(&mut self) {
        if let Some(runner) = self.session.as_mut() {
            runner.toggle_pause();
        }
    }

    /// Advance the running session. Finishing the last step records the
    /// day and moves to the completion screen.
    pub fn advance(&mut self) -> Option<Advance> {
        let runner = self.session.as_mut()?;
        let outcome = runner.advance(&mut self.progress);
        if let Advance::Completed { .. } = outcome {
            self.dispatch(Action::SessionFinished);
        }
        Some(outcome)
    }

    /// # Errors
    /// Returns an error if `digit` is outside 1..=9.
    pub fn input_digit(&mut self, digit: u8) -> Result<DigitOutcome, ValidationError> {
        match self.session.as_mut() {
            Some(runner) => runner.input_digit(digit),
            None => Ok(DigitOutcome::Ignored),
        }
    }

    pub fn elapse(&mut self, elapsed_ms: u64) {
        if let Some(runner) = self.session.as_mut() {
            runner.elapse(elapsed_ms);
        }
    }

    /// Events produced by the running session since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut events = std::mem::take(&mut self.finished_events);
        if let Some(runner) = self.session.as_mut() {
            events.extend(runner.drain_events());
        }
        events
    }

    pub fn into_store(self) -> ProgressStore<K, C> {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::i18n::LANGUAGE_KEY;
    use crate::progress::FixedClock;
    use crate::storage::MemoryKv;

    fn app(kv: MemoryKv) -> App<MemoryKv, FixedClock> {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        let timing = SessionConfig {
            drill_seed: Some(11),
            ..SessionConfig::default()
        };
        App::with_clock(kv, clock, timing)
    }

    #[test]
    fn fresh_install_asks_for_language() {
        let mut app = app(MemoryKv::new());
        assert_eq!(app.screen(), Screen::LanguageSelect);
        assert_eq!(app.translator().t("welcomeTitle"), "welcomeTitle");

        assert_eq!(app.dispatch(Action::ChooseLanguage(Language::En)), Screen::Welcome);
        assert_eq!(app.language(), Some(Language::En));
        assert_eq!(
            app.store().kv().get(LANGUAGE_KEY).unwrap().as_deref(),
            Some("en")
        );
    }

    #[test]
    fn stored_language_skips_selection() {
        let mut kv = MemoryKv::new();
        kv.set(LANGUAGE_KEY, "da").unwrap();
        let app = app(kv);
        assert_eq!(app.screen(), Screen::Welcome);
        assert_eq!(app.language(), Some(Language::Da));
    }

    #[test]
    fn exiting_a_session_records_nothing() {
        let mut kv = MemoryKv::new();
        kv.set(LANGUAGE_KEY, "en").unwrap();
        let mut app = app(kv);
        app.dispatch(Action::Continue);
        app.dispatch(Action::SelectDay(2));
        app.dispatch(Action::StartSession);
        assert!(app.session().is_some());
        app.advance();
        assert_eq!(app.dispatch(Action::Exit), Screen::Welcome);
        assert!(app.session().is_none());
        assert!(app.progress().completed_days.is_empty());
        assert_eq!(app.progress().current_day, 2);
    }

    #[test]
    fn full_session_completes_the_day() {
        let mut kv = MemoryKv::new();
        kv.set(LANGUAGE_KEY, "en").unwrap();
        let mut app = app(kv);
        app.dispatch(Action::Continue);
        app.dispatch(Action::SelectDay(3));
        app.dispatch(Action::StartSession);
        let steps = app.program_day().unwrap().steps.len();
        for _ in 0..steps - 1 {
            assert!(matches!(app.advance(), Some(Advance::Step(_))));
        }
        assert_eq!(app.advance(), Some(Advance::Completed { day: 3 }));
        assert_eq!(app.screen(), Screen::Complete { day: 3 });
        assert!(app.session().is_none());
        assert!(app.progress().is_completed(3));
        assert_eq!(app.progress().current_day, 4);
        assert_eq!(app.advance(), None);
        assert!(matches!(
            app.drain_events().last(),
            Some(Event::SessionCompleted { day: 3, .. })
        ));
    }

    #[test]
    fn reset_from_settings_keeps_screen() {
        let mut kv = MemoryKv::new();
        kv.set(LANGUAGE_KEY, "en").unwrap();
        let mut app = app(kv);
        app.dispatch(Action::Continue);
        app.dispatch(Action::SelectDay(7));
        assert_eq!(app.dispatch(Action::ResetProgress), Screen::Overview { day: 7 });
        assert_eq!(app.progress(), &ProgressState::default());
    }

    #[test]
    fn seeded_drills_are_reproducible() {
        let mut kv = MemoryKv::new();
        kv.set(LANGUAGE_KEY, "en").unwrap();
        let mut first = app(kv.clone());
        let mut second = app(kv);
        for app in [&mut first, &mut second] {
            app.dispatch(Action::Continue);
            app.dispatch(Action::SelectDay(1));
            app.dispatch(Action::StartSession);
            app.advance();
        }
        let a = first.session().unwrap().drill().unwrap().sequence().to_vec();
        let b = second.session().unwrap().drill().unwrap().sequence().to_vec();
        assert_eq!(a, b);
    }
}
