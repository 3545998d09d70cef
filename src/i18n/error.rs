//! Error types for the translation layer.

use thiserror::Error;

/// Errors raised by the catalog, the language registry and the toggle control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// A key has no entry in the requested locale's dictionary.
    #[error("missing translation for key '{key}' in locale '{locale}'")]
    MissingTranslation { locale: &'static str, key: String },

    /// The toggle control was mounted without a language context.
    #[error("language toggle mounted without a language context")]
    ContextUnavailable,

    /// The locale code is not part of the registry.
    #[error("unknown language code: '{0}'")]
    UnknownLocale(String),

    /// The locale exists but is switched off.
    #[error("language '{0}' is not enabled")]
    LocaleDisabled(String),

    /// An enabled locale has no dictionary.
    #[error("no translations supplied for locale '{0}'")]
    MissingLocale(&'static str),

    /// Authored data supplies two tables for one locale.
    #[error("translations for locale '{0}' supplied more than once")]
    DuplicateLocale(&'static str),

    /// Authored data defines the same key twice for one locale.
    #[error("duplicate key '{key}' in locale '{locale}'")]
    DuplicateKey { locale: &'static str, key: String },

    /// Dictionaries do not share an identical key set.
    ///
    /// Each entry is `(locale, key)`: the key exists in some other locale but
    /// not in this one.
    #[error("key parity violated: {} key(s) missing ({})", .missing.len(), format_missing(.missing))]
    ParityViolation { missing: Vec<(&'static str, String)> },
}

fn format_missing(missing: &[(&'static str, String)]) -> String {
    missing
        .iter()
        .map(|(locale, key)| format!("{}:{}", locale, key))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_translation_message() {
        let err = I18nError::MissingTranslation {
            locale: "hi",
            key: "unknownKey".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing translation for key 'unknownKey' in locale 'hi'"
        );
    }

    #[test]
    fn test_parity_violation_lists_every_gap() {
        let err = I18nError::ParityViolation {
            missing: vec![("hi", "save".to_string()), ("en", "kharif".to_string())],
        };
        let message = err.to_string();
        assert!(message.contains("2 key(s) missing"));
        assert!(message.contains("hi:save"));
        assert!(message.contains("en:kharif"));
    }

    #[test]
    fn test_locale_table_messages() {
        assert_eq!(
            I18nError::MissingLocale("hi").to_string(),
            "no translations supplied for locale 'hi'"
        );
        assert_eq!(
            I18nError::DuplicateLocale("en").to_string(),
            "translations for locale 'en' supplied more than once"
        );
    }

    #[test]
    fn test_unknown_locale_message() {
        let err = I18nError::UnknownLocale("fr".to_string());
        assert_eq!(err.to_string(), "unknown language code: 'fr'");
    }
}
