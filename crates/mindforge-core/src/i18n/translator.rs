use super::language::Language;
use super::tables;

/// Language used when the active language lacks a key.
pub const FALLBACK_LANGUAGE: Language = Language::En;

/// Resolves UI strings for the active language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Option<Language>,
}

impl Translator {
    pub fn new(language: Option<Language>) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    /// Look up `key` and fill `{name}` placeholders from `substitutions`.
    ///
    /// Falls back from the active language to English, then to the key
    /// itself. Before any language is chosen the key is returned as is.
    pub fn translate(&self, key: &str, substitutions: &[(&str, &str)]) -> String {
        let Some(language) = self.language else {
            return key.to_string();
        };
        let mut text = tables::lookup(language, key)
            .or_else(|| tables::lookup(FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
            .to_string();

        for (name, value) in substitutions {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Shorthand for a lookup without substitutions.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_active_language() {
        let t = Translator::new(Some(Language::De));
        assert_eq!(t.t("breatheIn"), "Einatmen");
        assert_eq!(t.t("dark"), "Dunkel");
    }

    #[test]
    fn substitutes_placeholders() {
        let t = Translator::new(Some(Language::Lt));
        assert_eq!(t.translate("dayCompleted", &[("day", "M2")]), "M2 diena baigta");
        let t = Translator::new(Some(Language::En));
        assert_eq!(t.translate("dayCompleted", &[("day", "5")]), "Day 5 completed");
    }

    #[test]
    fn falls_back_to_english_then_key() {
        let t = Translator::new(Some(Language::Lt));
        assert_eq!(
            t.t("reflectionPrompt"),
            "Take a moment to reflect on today's practice. Notice how your mind feels."
        );
        assert_eq!(t.t("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn no_language_returns_key() {
        let t = Translator::default();
        assert_eq!(t.t("welcomeTitle"), "welcomeTitle");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let t = Translator::new(Some(Language::En));
        assert_eq!(t.translate("dayCompleted", &[("week", "2")]), "Day {day} completed");
    }
}
