//! Translation catalog: one dictionary per enabled locale.
//!
//! The catalog is built once from authored tables, checked for key parity,
//! and never mutated afterwards. The global instance lives in a `OnceLock`
//! and may be read from any thread.

use crate::i18n::strings::LOCALE_TABLES;
use crate::i18n::{I18nError, Language, TranslationMetrics};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// What a lookup does when the key is absent from the active dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Development/test: the lookup fails with `MissingTranslation`.
    Strict,
    /// Production: the key itself is displayed.
    Fallback,
}

impl MissingKeyPolicy {
    /// `Strict` in debug builds, `Fallback` in release builds.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            MissingKeyPolicy::Strict
        } else {
            MissingKeyPolicy::Fallback
        }
    }
}

/// Key → display string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationDictionary {
    entries: BTreeMap<&'static str, &'static str>,
}

impl TranslationDictionary {
    /// Build a dictionary, rejecting keys that appear twice.
    pub fn from_entries(
        locale: Language,
        entries: &[(&'static str, &'static str)],
    ) -> Result<Self, I18nError> {
        let mut map = BTreeMap::new();
        for (key, text) in entries {
            if map.insert(*key, *text).is_some() {
                return Err(I18nError::DuplicateKey {
                    locale: locale.code(),
                    key: key.to_string(),
                });
            }
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(key, text)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The bilingual translation registry.
#[derive(Debug, Clone)]
pub struct Catalog {
    dictionaries: BTreeMap<Language, TranslationDictionary>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the catalog built from the shipped string tables.
    ///
    /// # Panics
    /// Panics on first access if the shipped tables violate key parity or
    /// contain duplicates. That is an authoring bug, not a runtime condition.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| {
            Catalog::from_entries(LOCALE_TABLES)
                .unwrap_or_else(|err| panic!("shipped translation tables are invalid: {}", err))
        })
    }

    /// Build a catalog from `(locale code, entries)` tables and verify parity.
    ///
    /// Every enabled locale must be supplied exactly once.
    pub fn from_entries(
        tables: &[(&str, &'static [(&'static str, &'static str)])],
    ) -> Result<Self, I18nError> {
        let mut dictionaries = BTreeMap::new();
        for (code, entries) in tables {
            let locale = Language::from_code(code)?;
            let dictionary = TranslationDictionary::from_entries(locale, entries)?;
            if dictionaries.insert(locale, dictionary).is_some() {
                return Err(I18nError::DuplicateLocale(locale.code()));
            }
        }

        if let Some(absent) = Language::all()
            .into_iter()
            .find(|locale| !dictionaries.contains_key(locale))
        {
            return Err(I18nError::MissingLocale(absent.code()));
        }

        let catalog = Self { dictionaries };
        catalog.check_parity()?;
        debug!(
            locales = catalog.dictionaries.len(),
            keys = catalog.len(),
            "Translation catalog loaded"
        );
        Ok(catalog)
    }

    /// Verify that every locale defines exactly the same keys.
    ///
    /// Computes the union of all key sets and reports every `(locale, key)`
    /// pair where the locale lacks a key some other locale has.
    pub fn check_parity(&self) -> Result<(), I18nError> {
        let union: BTreeSet<&'static str> = self
            .dictionaries
            .values()
            .flat_map(|dictionary| dictionary.keys())
            .collect();

        let missing: Vec<(&'static str, String)> = self
            .dictionaries
            .iter()
            .flat_map(|(locale, dictionary)| {
                union
                    .iter()
                    .filter(move |key| !dictionary.contains(key))
                    .map(move |key| (locale.code(), key.to_string()))
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(I18nError::ParityViolation { missing })
        }
    }

    /// Look up `key` in `locale`'s dictionary.
    pub fn get(&self, locale: Language, key: &str) -> Result<&'static str, I18nError> {
        let metrics = TranslationMetrics::global();
        metrics.record_lookup();

        match self.dictionary(locale).and_then(|d| d.get(key)) {
            Some(text) => Ok(text),
            None => {
                metrics.record_miss();
                Err(I18nError::MissingTranslation {
                    locale: locale.code(),
                    key: key.to_string(),
                })
            }
        }
    }

    /// Look up `key`, applying `policy` when it is missing.
    pub fn translate(
        &self,
        locale: Language,
        key: &str,
        policy: MissingKeyPolicy,
    ) -> Result<Cow<'static, str>, I18nError> {
        match self.get(locale, key) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(_) if policy == MissingKeyPolicy::Fallback => {
                warn!(locale = %locale, key, "Missing translation, displaying key");
                TranslationMetrics::global().record_fallback();
                Ok(Cow::Owned(key.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    /// Look up `key`, falling back to the key itself.
    pub fn translate_or_key(&self, locale: Language, key: &str) -> Cow<'static, str> {
        self.translate(locale, key, MissingKeyPolicy::Fallback)
            .unwrap_or_else(|_| Cow::Owned(key.to_string()))
    }

    /// Look up `key`, falling back to caller-supplied text. An empty
    /// `fallback` falls back to the key itself.
    pub fn translate_or(&self, locale: Language, key: &str, fallback: &str) -> Cow<'static, str> {
        match self.get(locale, key) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => {
                warn!(locale = %locale, key, "Missing translation, displaying fallback text");
                TranslationMetrics::global().record_fallback();
                let text = if fallback.is_empty() { key } else { fallback };
                Cow::Owned(text.to_string())
            }
        }
    }

    pub fn dictionary(&self, locale: Language) -> Option<&TranslationDictionary> {
        self.dictionaries.get(&locale)
    }

    pub fn contains(&self, locale: Language, key: &str) -> bool {
        self.dictionary(locale).is_some_and(|d| d.contains(key))
    }

    /// Locales present in the catalog, in code order.
    pub fn locales(&self) -> impl Iterator<Item = Language> + '_ {
        self.dictionaries.keys().copied()
    }

    /// Keys of `locale`'s dictionary in sorted order.
    pub fn keys(&self, locale: Language) -> Vec<&'static str> {
        self.dictionary(locale)
            .map(|d| d.keys().collect())
            .unwrap_or_default()
    }

    /// Number of keys per locale. Parity makes this the same for every locale.
    pub fn len(&self) -> usize {
        self.dictionaries
            .values()
            .next()
            .map(TranslationDictionary::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
