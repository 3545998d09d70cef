//! Internationalization (i18n) module for the bilingual farm manager UI.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: Validated `Language` type with toggle rotation
//! - `strings`: Authored English and Hindi display strings
//! - `catalog`: Parity-checked dictionaries and lookups with a missing-key policy
//! - `status`: Key status report for release audits
//! - `validator`: Feature coverage, key resolution and catalog lint
//! - `format`: Locale-aware number, currency and date formatting
//! - `metrics`: Lookup and toggle counters
//!
//! # Example
//!
//! ```rust
//! use farm_i18n::i18n::{Catalog, Language};
//!
//! let catalog = Catalog::global();
//! assert_eq!(catalog.get(Language::HINDI, "totalExpenses").unwrap(), "कुल खर्च");
//! assert_eq!(catalog.translate_or_key(Language::ENGLISH, "unknownKey"), "unknownKey");
//! ```

mod catalog;
mod error;
pub mod format;
mod language;
mod metrics;
mod registry;
pub mod status;
pub mod strings;
mod validator;

pub use catalog::{Catalog, MissingKeyPolicy, TranslationDictionary};
pub use error::I18nError;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use status::{KeyStatus, KeyStatusReport};
pub use validator::{
    Feature, FeatureCoverage, KeyIssue, KeyIssueKind, KeyIssues, TranslationValidator,
    ValidationReport,
};
