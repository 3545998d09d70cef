//! Translation audit module.
//!
//! Checks that each UI feature's keys are translated, resolves the canonical
//! key for a feature role, flags keys with known naming problems, and lints
//! the catalog contents.

use crate::i18n::{Catalog, Language};
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;
use tracing::warn;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make a string unusable
    pub errors: Vec<String>,

    /// Likely mistakes worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// A screen of the farm manager whose strings are audited together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    Labour,
    LotNumbers,
    Fields,
    Money,
    Borrowings,
    Transportation,
    Dashboard,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Labour,
        Feature::LotNumbers,
        Feature::Fields,
        Feature::Money,
        Feature::Borrowings,
        Feature::Transportation,
        Feature::Dashboard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Labour => "labour",
            Feature::LotNumbers => "lotNumbers",
            Feature::Fields => "fields",
            Feature::Money => "money",
            Feature::Borrowings => "borrowings",
            Feature::Transportation => "transportation",
            Feature::Dashboard => "dashboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Keys the feature's screen cannot render without.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Feature::Labour => &[
                "labourManagement",
                "labourManagementDescription",
                "manageLabourGroups",
                "manageLabourers",
                "labourGroups",
                "labourers",
                "payments",
                "paymentHistory",
                "attendanceRecord",
                "totalPayments",
                "activeGroups",
                "totalLabourers",
            ],
            Feature::LotNumbers => &[
                "lotNumbersManagement",
                "lotNumbersManagementDescription",
                "lotNumberManagement",
                "lotNumberManagementDescription",
                "addNewLotNumber",
                "lotNumberName",
                "category",
                "packetCount",
                "storageDate",
                "notes",
                "totalPackets",
                "lotDetails",
                "lotInformation",
                "storageDetails",
            ],
            Feature::Fields => &[
                "fieldsManagement",
                "fieldsManagementDescription",
                "addNewField",
                "fieldName",
                "location",
                "area",
                "plantingDate",
                "expectedHarvestDate",
            ],
            Feature::Money => &[
                "moneyRecords",
                "moneyRecordsDescription",
                "addNewRecord",
                "recordType",
                "amount",
                "description",
                "date",
                "totalIncome",
                "totalExpense",
                "netBalance",
            ],
            Feature::Borrowings => &[
                "borrowingsManagement",
                "borrowingsManagementDescription",
                "addNewBorrowing",
                "lenderName",
                "borrowingAmount",
                "interestRate",
                "borrowingDate",
                "repaymentDate",
                "totalBorrowed",
                "totalRepaid",
            ],
            Feature::Transportation => &[
                "transportationManagement",
                "transportationManagementDescription",
                "addTransportation",
                "transportDate",
                "lotNumber",
                "transportationRecords",
            ],
            Feature::Dashboard => &[
                "farmDashboard",
                "dashboardDescription",
                "totalFields",
                "totalYield",
                "laborCost",
                "expenses",
            ],
        }
    }

    /// `(role, key)` pairs naming the canonical key for each role on this
    /// feature's screen.
    fn role_keys(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Feature::Labour => &[
                ("title", "labourManagement"),
                ("description", "labourManagementDescription"),
                ("manageGroups", "manageLabourGroups"),
                ("manageLabourers", "manageLabourers"),
                ("groups", "labourGroups"),
                ("groupDetails", "labourGroupDetails"),
                ("labourerDetails", "labourerDetails"),
                ("paymentHistory", "paymentHistory"),
                ("attendanceRecord", "attendanceRecord"),
            ],
            Feature::LotNumbers => &[
                ("title", "lotNumbersManagement"),
                ("description", "lotNumbersManagementDescription"),
                ("titleAlt", "lotNumberManagement"),
                ("descriptionAlt", "lotNumberManagementDescription"),
                ("details", "lotDetails"),
                ("information", "lotInformation"),
                ("history", "lotHistory"),
                ("statistics", "lotStatistics"),
                ("storage", "storageDetails"),
            ],
            Feature::Fields => &[
                ("title", "fieldsManagement"),
                ("description", "fieldsManagementDescription"),
            ],
            Feature::Money => &[
                ("title", "moneyRecords"),
                ("description", "moneyRecordsDescription"),
            ],
            Feature::Borrowings => &[
                ("title", "borrowingsManagement"),
                ("description", "borrowingsManagementDescription"),
            ],
            Feature::Transportation => &[
                ("title", "transportationManagement"),
                ("description", "transportationManagementDescription"),
            ],
            Feature::Dashboard => &[
                ("title", "farmDashboard"),
                ("description", "dashboardDescription"),
            ],
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translation coverage of one feature in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCoverage {
    pub feature: Feature,
    pub locale: Language,
    pub missing: Vec<&'static str>,
    pub present: Vec<&'static str>,
    pub total: usize,
    pub all_present: bool,
}

/// Category of a known key naming problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyIssueKind {
    SingularVsPlural,
    MissingDescription,
}

/// A naming problem with a suggested replacement key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyIssue {
    pub kind: KeyIssueKind,
    pub message: &'static str,
    pub suggestion: String,
}

/// Naming problems found for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyIssues {
    pub key: String,
    pub issues: Vec<KeyIssue>,
}

impl KeyIssues {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Keys using the singular form where the UI standardised on plural.
const SINGULAR_VS_PLURAL: &[(&str, &str)] = &[
    ("lotNumberManagement", "lotNumbersManagement"),
    ("fieldManagement", "fieldsManagement"),
    ("moneyManagement", "moneyRecords"),
    ("borrowingManagement", "borrowingsManagement"),
];

/// Description keys that were referenced but never authored.
const MISSING_DESCRIPTIONS: &[&str] = &[
    "lotNumberManagementDescription",
    "fieldManagementDescription",
    "moneyManagementDescription",
    "borrowingManagementDescription",
];

/// Auditor for the translation catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslationValidator;

static KEY_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Check which of `feature`'s required keys `locale` translates.
    pub fn validate_feature(catalog: &Catalog, locale: Language, feature: Feature) -> FeatureCoverage {
        let required = feature.required_keys();
        let (present, missing): (Vec<&'static str>, Vec<&'static str>) = required
            .iter()
            .copied()
            .partition(|key| catalog.contains(locale, key));

        FeatureCoverage {
            feature,
            locale,
            all_present: missing.is_empty(),
            total: required.len(),
            missing,
            present,
        }
    }

    /// Coverage of every feature in every catalog locale.
    pub fn validate_all_features(catalog: &Catalog) -> Vec<FeatureCoverage> {
        catalog
            .locales()
            .flat_map(|locale| {
                Feature::ALL
                    .into_iter()
                    .map(move |feature| Self::validate_feature(catalog, locale, feature))
            })
            .collect()
    }

    /// Canonical key for a role on a feature's screen (e.g. `title`).
    pub fn resolve_key(feature: Feature, role: &str) -> Option<&'static str> {
        feature
            .role_keys()
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, key)| *key)
    }

    /// Display string for a role on a feature's screen, or `fallback` when
    /// the resolved key is not translated.
    ///
    /// An unknown role is looked up as a key in its own right.
    pub fn safe_translate(
        catalog: &Catalog,
        locale: Language,
        feature: Feature,
        role: &str,
        fallback: &str,
    ) -> Cow<'static, str> {
        let key = match Self::resolve_key(feature, role) {
            Some(key) => key,
            None => {
                warn!(feature = %feature, role, "No canonical key for role");
                role
            }
        };
        catalog.translate_or(locale, key, fallback)
    }

    /// Flag keys from the known problem lists.
    pub fn check_key_issues(key: &str) -> KeyIssues {
        let mut issues = Vec::new();

        if let Some((_, plural)) = SINGULAR_VS_PLURAL.iter().find(|(singular, _)| *singular == key) {
            issues.push(KeyIssue {
                kind: KeyIssueKind::SingularVsPlural,
                message: "Consider using plural form for consistency",
                suggestion: plural.to_string(),
            });
        }

        if MISSING_DESCRIPTIONS.contains(&key) {
            issues.push(KeyIssue {
                kind: KeyIssueKind::MissingDescription,
                message: "Description key might be missing",
                suggestion: format!("{}Description", key),
            });
        }

        KeyIssues {
            key: key.to_string(),
            issues,
        }
    }

    /// Lint the catalog contents.
    ///
    /// Errors: empty display strings. Warnings: keys that are not
    /// lowerCamelCase, and non-canonical strings identical to the canonical
    /// string (usually an untranslated copy).
    pub fn lint_catalog(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();
        let regex = KEY_NAME_REGEX.get_or_init(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());

        for key in catalog.keys(canonical) {
            if !regex.is_match(key) {
                report
                    .warnings
                    .push(format!("Key '{}' is not lowerCamelCase", key));
            }
        }

        for locale in catalog.locales() {
            let Some(dictionary) = catalog.dictionary(locale) else {
                continue;
            };
            for (key, text) in dictionary.iter() {
                if text.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Empty display string for '{}' in '{}'", key, locale));
                    continue;
                }
                if locale == canonical {
                    continue;
                }
                let source = catalog
                    .dictionary(canonical)
                    .and_then(|d| d.get(key));
                if source == Some(text) {
                    report.warnings.push(format!(
                        "'{}' in '{}' is identical to '{}' (untranslated?)",
                        key, locale, canonical
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Feature Coverage Tests ====================

    #[test]
    fn test_every_feature_fully_translated() {
        for coverage in TranslationValidator::validate_all_features(Catalog::global()) {
            assert!(
                coverage.all_present,
                "{} in {} misses {:?}",
                coverage.feature, coverage.locale, coverage.missing
            );
            assert_eq!(coverage.present.len(), coverage.total);
        }
    }

    #[test]
    fn test_validate_all_features_covers_each_locale() {
        let coverage = TranslationValidator::validate_all_features(Catalog::global());
        assert_eq!(coverage.len(), Feature::ALL.len() * 2);
    }

    #[test]
    fn test_validate_feature_reports_missing() {
        const EN: &[(&str, &str)] = &[("farmDashboard", "Farm Dashboard"), ("expenses", "Expenses")];
        const HI: &[(&str, &str)] = &[("farmDashboard", "फार्म डैशबोर्ड"), ("expenses", "खर्च")];
        let catalog = Catalog::from_entries(&[("en", EN), ("hi", HI)]).expect("valid catalog");

        let coverage =
            TranslationValidator::validate_feature(&catalog, Language::ENGLISH, Feature::Dashboard);

        assert!(!coverage.all_present);
        assert_eq!(coverage.total, 6);
        assert_eq!(coverage.present, vec!["farmDashboard", "expenses"]);
        assert_eq!(
            coverage.missing,
            vec!["dashboardDescription", "totalFields", "totalYield", "laborCost"]
        );
    }

    // ==================== Feature Name Tests ====================

    #[test]
    fn test_feature_name_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_name("weather"), None);
    }

    // ==================== Key Resolution Tests ====================

    #[test]
    fn test_resolve_lot_number_keys() {
        assert_eq!(
            TranslationValidator::resolve_key(Feature::LotNumbers, "title"),
            Some("lotNumbersManagement")
        );
        assert_eq!(
            TranslationValidator::resolve_key(Feature::LotNumbers, "description"),
            Some("lotNumbersManagementDescription")
        );
    }

    #[test]
    fn test_resolve_labour_keys() {
        assert_eq!(
            TranslationValidator::resolve_key(Feature::Labour, "manageGroups"),
            Some("manageLabourGroups")
        );
        assert_eq!(
            TranslationValidator::resolve_key(Feature::Labour, "manageLabourers"),
            Some("manageLabourers")
        );
    }

    #[test]
    fn test_resolve_unknown_role() {
        assert_eq!(TranslationValidator::resolve_key(Feature::Money, "history"), None);
    }

    #[test]
    fn test_every_resolved_key_is_translated() {
        let catalog = Catalog::global();
        for feature in Feature::ALL {
            for (role, key) in feature.role_keys() {
                for locale in catalog.locales() {
                    assert!(
                        catalog.contains(locale, key),
                        "{}.{} -> {} missing in {}",
                        feature,
                        role,
                        key,
                        locale
                    );
                }
            }
        }
    }

    // ==================== Key Issue Tests ====================

    // ==================== Safe Translation Tests ====================

    #[test]
    fn test_safe_translate_resolves_role() {
        let catalog = Catalog::global();
        assert_eq!(
            TranslationValidator::safe_translate(catalog, Language::ENGLISH, Feature::Dashboard, "title", "Dashboard"),
            catalog.get(Language::ENGLISH, "farmDashboard").unwrap()
        );
        assert_eq!(
            TranslationValidator::safe_translate(catalog, Language::HINDI, Feature::LotNumbers, "title", ""),
            catalog.get(Language::HINDI, "lotNumbersManagement").unwrap()
        );
    }

    #[test]
    fn test_safe_translate_falls_back_for_untranslated_key() {
        const EN: &[(&str, &str)] = &[("farmDashboard", "Farm Dashboard")];
        const HI: &[(&str, &str)] = &[("farmDashboard", "फार्म डैशबोर्ड")];
        let catalog = Catalog::from_entries(&[("en", EN), ("hi", HI)]).expect("valid catalog");

        assert_eq!(
            TranslationValidator::safe_translate(&catalog, Language::HINDI, Feature::Dashboard, "description", "Overview"),
            "Overview"
        );
        assert_eq!(
            TranslationValidator::safe_translate(&catalog, Language::HINDI, Feature::Dashboard, "description", ""),
            "dashboardDescription"
        );
    }

    #[test]
    fn test_safe_translate_unknown_role_is_used_as_key() {
        let catalog = Catalog::global();
        assert_eq!(
            TranslationValidator::safe_translate(catalog, Language::HINDI, Feature::Fields, "language", "Language"),
            "भाषा"
        );
        assert_eq!(
            TranslationValidator::safe_translate(catalog, Language::HINDI, Feature::Fields, "nonexistentRole", "Fallback"),
            "Fallback"
        );
    }

    #[test]
    fn test_check_key_issues_singular_and_description() {
        let issues = TranslationValidator::check_key_issues("lotNumberManagement");
        assert!(issues.has_issues());
        assert_eq!(issues.issues.len(), 1);
        assert_eq!(issues.issues[0].kind, KeyIssueKind::SingularVsPlural);
        assert_eq!(issues.issues[0].suggestion, "lotNumbersManagement");
    }

    #[test]
    fn test_check_key_issues_missing_description() {
        let issues = TranslationValidator::check_key_issues("fieldManagementDescription");
        assert_eq!(issues.issues.len(), 1);
        assert_eq!(issues.issues[0].kind, KeyIssueKind::MissingDescription);
    }

    #[test]
    fn test_check_key_issues_clean_key() {
        let issues = TranslationValidator::check_key_issues("manageLabourGroups");
        assert!(!issues.has_issues());
        assert_eq!(issues.key, "manageLabourGroups");
    }

    // ==================== Lint Tests ====================

    #[test]
    fn test_lint_shipped_catalog_is_clean() {
        let report = TranslationValidator::lint_catalog(Catalog::global());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_lint_flags_bad_entries() {
        const EN: &[(&str, &str)] = &[
            ("Save_Button", "Save"),
            ("notes", "Notes"),
            ("blank", "Blank"),
        ];
        const HI: &[(&str, &str)] = &[
            ("Save_Button", "सहेजें"),
            ("notes", "Notes"),
            ("blank", "  "),
        ];
        let catalog = Catalog::from_entries(&[("en", EN), ("hi", HI)]).expect("valid catalog");

        let report = TranslationValidator::lint_catalog(&catalog);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'blank' in 'hi'"));
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("Save_Button")));
        assert!(report.warnings.iter().any(|w| w.contains("untranslated")));
    }

    #[test]
    fn test_validation_report_states() {
        let mut report = ValidationReport::new();
        assert!(report.is_clean());

        report.warnings.push("Test warning".to_string());
        assert!(!report.is_clean());
        assert!(!report.has_errors());

        report.errors.push("Test error".to_string());
        assert!(report.has_errors());
    }
}
