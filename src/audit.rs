//! Release audit: everything the `i18n-audit` tool reports about a catalog.

use crate::i18n::{
    Catalog, FeatureCoverage, KeyStatusReport, Language, MetricsReport, TranslationMetrics,
    TranslationValidator, ValidationReport,
};
use serde::Serialize;
use std::fmt::Write;

/// Collected audit results for one catalog.
#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub locales: Vec<Language>,
    pub keys_per_locale: usize,
    pub coverage: Vec<FeatureCoverage>,
    pub lint: ValidationReport,
    pub key_status: KeyStatusReport,
    pub metrics: MetricsReport,
}

impl AuditSummary {
    /// Run every check against `catalog`.
    ///
    /// Parity is not re-checked here: a `Catalog` cannot be built without it.
    pub fn run(catalog: &Catalog) -> Self {
        Self {
            locales: catalog.locales().collect(),
            keys_per_locale: catalog.len(),
            coverage: TranslationValidator::validate_all_features(catalog),
            lint: TranslationValidator::lint_catalog(catalog),
            key_status: KeyStatusReport::recent_additions(catalog),
            metrics: TranslationMetrics::global().report(),
        }
    }

    /// True when nothing blocks a release.
    pub fn passed(&self) -> bool {
        !self.lint.has_errors()
            && !self.key_status.has_missing()
            && self.coverage.iter().all(|c| c.all_present)
    }

    /// Plain-text rendering for terminals and CI logs.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let locales: Vec<&str> = self.locales.iter().map(|l| l.code()).collect();

        let _ = writeln!(out, "Locales: {}", locales.join(", "));
        let _ = writeln!(out, "Keys per locale: {}", self.keys_per_locale);
        let _ = writeln!(out, "Key parity: ok");

        let _ = writeln!(out, "\nFeature coverage:");
        for coverage in &self.coverage {
            let _ = writeln!(
                out,
                "  [{}] {}: {}/{}{}",
                coverage.locale,
                coverage.feature,
                coverage.present.len(),
                coverage.total,
                if coverage.all_present {
                    String::new()
                } else {
                    format!(" (missing: {})", coverage.missing.join(", "))
                }
            );
        }

        let _ = writeln!(out, "\nLint:");
        if self.lint.is_clean() {
            let _ = writeln!(out, "  clean");
        }
        for error in &self.lint.errors {
            let _ = writeln!(out, "  error: {}", error);
        }
        for warning in &self.lint.warnings {
            let _ = writeln!(out, "  warning: {}", warning);
        }

        let _ = writeln!(out, "\nTranslation key status:");
        for line in self.key_status.lines() {
            let _ = writeln!(out, "  {}", line);
        }

        out
    }
}
