//! # MindForge Core Library
//!
//! Core logic for MindForge, a guided 30-day (plus 7 maintenance days)
//! mental training program of short daily sessions. Front ends, such as
//! the `mindforge` CLI, are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Program**: static tables mapping each day to its timed steps
//! - **Progress**: the persisted current day, completed days and streak
//! - **Session**: a virtual-clock runner for one day's steps, including
//!   the breathing guide and the digit drill
//! - **Flow**: a pure screen state machine and the `App` controller
//! - **Storage**: SQLite key-value persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`ProgramCatalog`]: day -> steps lookup
//! - [`ProgressStore`]: load, mutate and persist progress
//! - [`SessionRunner`]: step countdown and drill state machine
//! - [`App`]: single owner of progress, language and the running session

pub mod error;
pub mod events;
pub mod flow;
pub mod i18n;
pub mod program;
pub mod progress;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use flow::{Action, App, DayPicker, Effect, Screen};
pub use i18n::{Language, Translator};
pub use program::{ProgramCatalog, ProgramDay, Step, StepType};
pub use progress::{Clock, FixedClock, ProgressState, ProgressStore, SystemClock};
pub use scheduler::{TimerHandle, TimerWheel};
pub use session::{Advance, DayCompletion, SessionRunState, SessionRunner};
pub use storage::{Config, Database, KvStore, MemoryKv, SessionConfig};
