//! Translation metrics and observability module.
//!
//! Counts catalog lookups, missing keys, production fallbacks and language
//! toggles so the audit tool (or a host application) can report them.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Translation counters.
#[derive(Debug)]
pub struct TranslationMetrics {
    /// Number of catalog lookups
    lookups: AtomicUsize,

    /// Number of lookups whose key was absent from the active dictionary
    misses: AtomicUsize,

    /// Number of misses answered with the key itself
    fallbacks: AtomicUsize,

    /// Number of language toggles
    toggles: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    fn new() -> Self {
        TranslationMetrics {
            lookups: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            toggles: AtomicUsize::new(0),
        }
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_toggle(&self) {
        self.toggles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn toggles(&self) -> usize {
        self.toggles.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let misses = self.misses();
        let hit_rate = if lookups > 0 {
            (lookups.saturating_sub(misses) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            misses,
            hit_rate,
            fallbacks: self.fallbacks(),
            toggles: self.toggles(),
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub misses: usize,

    /// Share of lookups that found their key, as a percentage (0-100)
    pub hit_rate: f64,

    pub fallbacks: usize,
    pub toggles: usize,
}
