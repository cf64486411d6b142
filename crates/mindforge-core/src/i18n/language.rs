use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::KvStore;

/// Key of the language preference in the kv store.
pub const LANGUAGE_KEY: &str = "mindforge-language";

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Da,
    De,
    Lt,
}

impl Language {
    /// Selection order shown on the language screen.
    pub const ALL: [Language; 4] = [Language::Da, Language::En, Language::De, Language::Lt];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Da => "da",
            Language::De => "de",
            Language::Lt => "lt",
        }
    }

    /// The language's name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Da => "Dansk",
            Language::De => "Deutsch",
            Language::Lt => "Lietuvių",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Da => "🇩🇰",
            Language::De => "🇩🇪",
            Language::Lt => "🇱🇹",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "da" => Ok(Language::Da),
            "de" => Ok(Language::De),
            "lt" => Ok(Language::Lt),
            other => Err(ValidationError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Read the stored language preference.
///
/// Absent, unreadable, or unsupported values all mean "not chosen yet".
pub fn load_language<K: KvStore + ?Sized>(kv: &K) -> Option<Language> {
    match kv.get(LANGUAGE_KEY) {
        Ok(Some(code)) => match code.parse() {
            Ok(language) => Some(language),
            Err(e) => {
                tracing::warn!("ignoring stored language preference: {e}");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("language preference unreadable: {e}");
            None
        }
    }
}

/// Persist the language preference. Failures are logged, not returned.
pub fn save_language<K: KvStore + ?Sized>(kv: &mut K, language: Language) {
    if let Err(e) = kv.set(LANGUAGE_KEY, language.code()) {
        tracing::warn!("could not persist language preference: {e}");
    }
}
