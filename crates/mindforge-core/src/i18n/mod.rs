//! Localization: supported languages, string tables, and the persisted
//! language preference.

mod language;
mod tables;
mod translator;

pub use language::{load_language, save_language, Language, LANGUAGE_KEY};
pub use translator::{Translator, FALLBACK_LANGUAGE};
