//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized singleton (`OnceLock`) holding the
//! metadata for every locale the UI can display. It never changes after
//! initialization, so any number of readers may share it.

use crate::i18n::I18nError;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hindi")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "हिंदी")
    pub native_name: &'static str,

    /// Short label shown on the language toggle (e.g., "EN", "हि")
    pub short_label: &'static str,

    /// BCP 47 tag used for locale-aware formatting (e.g., "en-US", "hi-IN")
    pub bcp47: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Resolve a language code to an enabled language.
    ///
    /// # Returns
    /// * `Err(I18nError::UnknownLocale)` if the code is not registered
    /// * `Err(I18nError::LocaleDisabled)` if the language is switched off
    pub fn resolve(&self, code: &str) -> Result<&LanguageConfig, I18nError> {
        match self.get_by_code(code) {
            Some(config) if config.enabled => Ok(config),
            Some(_) => Err(I18nError::LocaleDisabled(code.to_string())),
            None => Err(I18nError::UnknownLocale(code.to_string())),
        }
    }

    /// The enabled language that follows `code` in registry order, wrapping
    /// around at the end.
    ///
    /// With exactly two enabled languages this is a swap. Returns `None` when
    /// `code` is not an enabled language.
    pub fn next_enabled(&self, code: &str) -> Option<&LanguageConfig> {
        let enabled = self.list_enabled();
        let position = enabled.iter().position(|lang| lang.code == code)?;
        Some(enabled[(position + 1) % enabled.len()])
    }
}

/// Default language configurations: English (canonical) and Hindi.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            short_label: "EN",
            bcp47: "en-US",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिंदी",
            short_label: "हि",
            bcp47: "hi-IN",
            is_canonical: false,
            enabled: true,
        },
    ]
}
