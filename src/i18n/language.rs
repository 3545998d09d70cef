//! Language type: validated locale representation.
//!
//! A `Language` can only be constructed for a code that exists in the
//! registry and is enabled, so every `Language` value is safe to look up.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    /// English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Hindi.
    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(I18nError::UnknownLocale)` if the code is not registered
    /// * `Err(I18nError::LocaleDisabled)` if the language is switched off
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let config = LanguageRegistry::get().resolve(code)?;
        Ok(Language { code: config.code })
    }

    /// Get the canonical (source) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for a Language built via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "हिंदी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label shown on the language toggle: "EN" for English, "हि" for Hindi.
    pub fn short_label(&self) -> &'static str {
        self.config().short_label
    }

    /// BCP 47 tag used by the formatters.
    pub fn bcp47(&self) -> &'static str {
        self.config().bcp47
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The language a toggle switches to from this one.
    ///
    /// Rotates through enabled languages in registry order; with the two
    /// shipped languages `l.toggled().toggled() == l`.
    pub fn toggled(&self) -> Language {
        LanguageRegistry::get()
            .next_enabled(self.code)
            .map(|config| Language { code: config.code })
            .unwrap_or(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_hindi_constant() {
        let hindi = Language::HINDI;
        assert_eq!(hindi.code(), "hi");
        assert_eq!(hindi.name(), "Hindi");
        assert!(!hindi.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_hindi() {
        let language = Language::from_code("hi").expect("Should succeed");
        assert_eq!(language, Language::HINDI);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert_eq!(result, Err(I18nError::UnknownLocale("fr".to_string())));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== Label Tests ====================

    #[test]
    fn test_short_labels() {
        assert_eq!(Language::ENGLISH.short_label(), "EN");
        assert_eq!(Language::HINDI.short_label(), "हि");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::ENGLISH.native_name(), "English");
        assert_eq!(Language::HINDI.native_name(), "हिंदी");
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_toggled_switches_language() {
        assert_eq!(Language::ENGLISH.toggled(), Language::HINDI);
        assert_eq!(Language::HINDI.toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_toggled_round_trip() {
        for language in Language::all() {
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_all_lists_enabled_languages() {
        assert_eq!(Language::all(), vec![Language::ENGLISH, Language::HINDI]);
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::HINDI.to_string(), "hi");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::HINDI).expect("Should serialize");
        assert_eq!(json, "\"hi\"");
    }
}
