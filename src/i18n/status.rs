//! Key status report: which tracked keys are new, which already existed and
//! which are missing from the catalog.
//!
//! The report is purely informational. Nothing here runs at load time;
//! callers opt in through `emit_diagnostics`.

use crate::i18n::Catalog;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// Keys introduced in the latest dashboard/lot-number release.
pub const RECENTLY_ADDED_KEYS: &[&str] = &[
    "totalExpenses",
    "totalRecords",
    "thisMonth",
    "exportPdf",
    "totalReturned",
    "pendingReturns",
    "totalLots",
    "searchLotNumber",
];

/// Keys requested in the same release that were already present.
pub const PREVIOUSLY_KNOWN_KEYS: &[&str] = &["fields"];

/// Classification of a tracked key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStatus {
    /// Present in every locale and not in the previously known set.
    Added,
    /// Present in every locale and already known before.
    AlreadyExisted,
    /// Absent from at least one locale.
    Missing,
}

impl KeyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyStatus::Added => "added",
            KeyStatus::AlreadyExisted => "already-existed",
            KeyStatus::Missing => "missing",
        }
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracked key → status, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyStatusReport {
    statuses: BTreeMap<String, KeyStatus>,
}

impl KeyStatusReport {
    /// Classify every key in `tracked` against `catalog` and the set of keys
    /// known before this release.
    pub fn generate(catalog: &Catalog, tracked: &[&str], previously_known: &[&str]) -> Self {
        let known: BTreeSet<&str> = previously_known.iter().copied().collect();

        let statuses = tracked
            .iter()
            .map(|key| {
                let everywhere = catalog.locales().all(|locale| catalog.contains(locale, key));
                let status = if !everywhere {
                    KeyStatus::Missing
                } else if known.contains(key) {
                    KeyStatus::AlreadyExisted
                } else {
                    KeyStatus::Added
                };
                (key.to_string(), status)
            })
            .collect();

        Self { statuses }
    }

    /// Report for the keys tracked in the latest release.
    pub fn recent_additions(catalog: &Catalog) -> Self {
        let tracked: Vec<&str> = RECENTLY_ADDED_KEYS
            .iter()
            .chain(PREVIOUSLY_KNOWN_KEYS)
            .copied()
            .collect();
        Self::generate(catalog, &tracked, PREVIOUSLY_KNOWN_KEYS)
    }

    pub fn status(&self, key: &str) -> Option<KeyStatus> {
        self.statuses.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, KeyStatus)> {
        self.statuses.iter().map(|(k, s)| (k.as_str(), *s))
    }

    /// Number of keys with the given status.
    pub fn count(&self, status: KeyStatus) -> usize {
        self.statuses.values().filter(|s| **s == status).count()
    }

    pub fn has_missing(&self) -> bool {
        self.count(KeyStatus::Missing) > 0
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Human-readable lines of the form `<key>: <status>`.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, status)| format!("{}: {}", key, status))
            .collect()
    }

    /// Log every line at debug level.
    pub fn emit_diagnostics(&self) {
        debug!("Translation key status:");
        for line in self.lines() {
            debug!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: &[(&str, &str)] = &[
        ("fields", "Fields"),
        ("totalLots", "Total Lots"),
        ("thisMonth", "This Month"),
    ];
    const HI: &[(&str, &str)] = &[
        ("fields", "खेत"),
        ("totalLots", "कुल लॉट"),
        ("thisMonth", "इस महीने"),
    ];

    fn catalog() -> Catalog {
        Catalog::from_entries(&[("en", EN), ("hi", HI)]).expect("valid catalog")
    }

    #[test]
    fn test_generate_classifies_keys() {
        let report = KeyStatusReport::generate(
            &catalog(),
            &["totalLots", "fields", "exportPdf"],
            &["fields"],
        );

        assert_eq!(report.status("totalLots"), Some(KeyStatus::Added));
        assert_eq!(report.status("fields"), Some(KeyStatus::AlreadyExisted));
        assert_eq!(report.status("exportPdf"), Some(KeyStatus::Missing));
        assert_eq!(report.status("untracked"), None);
        assert!(report.has_missing());
    }

    #[test]
    fn test_previously_known_but_absent_is_missing() {
        let report = KeyStatusReport::generate(&catalog(), &["save"], &["save"]);
        assert_eq!(report.status("save"), Some(KeyStatus::Missing));
    }

    #[test]
    fn test_recent_additions_on_shipped_catalog() {
        let report = KeyStatusReport::recent_additions(Catalog::global());

        assert_eq!(report.len(), 9);
        assert_eq!(report.count(KeyStatus::Added), 8);
        assert_eq!(report.count(KeyStatus::AlreadyExisted), 1);
        assert_eq!(report.status("fields"), Some(KeyStatus::AlreadyExisted));
        assert!(!report.has_missing());
    }

    #[test]
    fn test_lines_format() {
        let report = KeyStatusReport::generate(&catalog(), &["thisMonth", "fields"], &["fields"]);
        assert_eq!(
            report.lines(),
            vec!["fields: already-existed".to_string(), "thisMonth: added".to_string()]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = KeyStatusReport::generate(&catalog(), &[], &[]);
        assert!(report.is_empty());
        assert!(report.lines().is_empty());
    }

    #[test]
    fn test_serializes_as_map() {
        let report = KeyStatusReport::generate(&catalog(), &["fields"], &["fields"]);
        let json = serde_json::to_string(&report).expect("Should serialize");
        assert_eq!(json, r#"{"fields":"already-existed"}"#);
    }
}
