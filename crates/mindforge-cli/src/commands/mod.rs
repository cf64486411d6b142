pub mod config;
pub mod day;
pub mod language;
pub mod progress;
pub mod session;

use mindforge_core::i18n::{load_language, Language, Translator};
use mindforge_core::storage::Database;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Translator for terminal output. Falls back to English before a
/// language has been chosen so output stays readable.
pub fn terminal_translator(db: &Database) -> Translator {
    Translator::new(Some(load_language(db).unwrap_or(Language::En)))
}
