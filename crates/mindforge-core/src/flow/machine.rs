//! Screen state machine.
//!
//! ```text
//! LanguageSelect -> Welcome -> DaySelect -> Overview -> Session -> Complete
//!                      ^                      |  ^          |          |
//!                      |                      |  +----------+-- next --+
//!                      +------ home / exit ---+-------------+----------+
//! ```
//!
//! [`transition`] is pure: it returns the next screen together with the
//! side effects the caller has to carry out.

use serde::Serialize;

use crate::i18n::Language;
use crate::program::LAST_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    LanguageSelect,
    Welcome,
    DaySelect,
    Overview { day: u8 },
    Session { day: u8 },
    Complete { day: u8 },
}

impl Screen {
    /// Where the app opens: language selection until one has been stored.
    pub fn initial(has_language: bool) -> Self {
        if has_language {
            Screen::Welcome
        } else {
            Screen::LanguageSelect
        }
    }

    /// The day this screen is about, if any.
    pub fn day(&self) -> Option<u8> {
        match *self {
            Screen::Overview { day } | Screen::Session { day } | Screen::Complete { day } => {
                Some(day)
            }
            _ => None,
        }
    }
}

/// User intents fed into the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChooseLanguage(Language),
    /// Leave the welcome screen.
    Continue,
    SelectDay(u8),
    ChooseAnother,
    StartSession,
    /// The runner finished the last step.
    SessionFinished,
    /// Abandon the running session.
    Exit,
    NextDay,
    Home,
    /// Settings: switch language without leaving the screen.
    ChangeLanguage(Language),
    /// Settings: wipe progress without leaving the screen.
    ResetProgress,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistLanguage(Language),
    SetCurrentDay(u8),
    StartSession(u8),
    EndSession,
    ResetProgress,
}

/// What the machine needs to know about the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowContext {
    /// Highest day the day picker may offer.
    pub max_selectable_day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub screen: Screen,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(screen: Screen) -> Self {
        Self {
            screen,
            effects: Vec::new(),
        }
    }

    fn with(screen: Screen, effects: impl Into<Vec<Effect>>) -> Self {
        Self {
            screen,
            effects: effects.into(),
        }
    }
}

/// Whether the completion screen should offer moving on.
pub fn next_day_available(day: u8) -> bool {
    day < LAST_DAY
}

/// Compute the next screen. Actions that make no sense on `screen` leave
/// it unchanged with no effects.
pub fn transition(screen: &Screen, action: Action, ctx: &FlowContext) -> Transition {
    use Action as A;
    use Screen as S;

    match (*screen, action) {
        (S::LanguageSelect, A::ChooseLanguage(lang)) => {
            Transition::with(S::Welcome, [Effect::PersistLanguage(lang)])
        }
        (S::LanguageSelect, _) => Transition::to(*screen),

        (_, A::ChangeLanguage(lang)) => Transition::with(*screen, [Effect::PersistLanguage(lang)]),
        (_, A::ResetProgress) => Transition::with(*screen, [Effect::ResetProgress]),

        (S::Welcome, A::Continue) => Transition::to(S::DaySelect),

        (S::DaySelect, A::SelectDay(day)) if (1..=ctx.max_selectable_day).contains(&day) => {
            Transition::with(S::Overview { day }, [Effect::SetCurrentDay(day)])
        }

        (S::Overview { day }, A::StartSession) => {
            Transition::with(S::Session { day }, [Effect::StartSession(day)])
        }
        (S::Overview { .. }, A::ChooseAnother) => Transition::to(S::DaySelect),

        (S::Session { day }, A::SessionFinished) => {
            Transition::with(S::Complete { day }, [Effect::EndSession])
        }
        (S::Session { .. }, A::Exit) => Transition::with(S::Welcome, [Effect::EndSession]),

        (S::Complete { day }, A::NextDay) => {
            let next = day.saturating_add(1).min(LAST_DAY);
            Transition::with(S::Overview { day: next }, [Effect::SetCurrentDay(next)])
        }

        (S::Overview { .. } | S::Complete { .. }, A::Home) => Transition::to(S::Welcome),

        _ => Transition::to(*screen),
    }
}
