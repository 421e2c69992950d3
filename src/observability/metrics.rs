//! Metrics registry
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Atomic, lock-free; `Relaxed` ordering is enough for counters

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by the loader and the HTTP layer
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    translations_loaded: AtomicU64,
    verses_loaded: AtomicU64,
    malformed_lines: AtomicU64,
    lookups_served: AtomicU64,
    lookups_not_found: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Load metrics

    /// Record one loaded translation
    pub fn record_translation(&self, verses: u64, malformed: u64) {
        self.translations_loaded.fetch_add(1, Ordering::Relaxed);
        self.verses_loaded.fetch_add(verses, Ordering::Relaxed);
        self.malformed_lines.fetch_add(malformed, Ordering::Relaxed);
    }

    // Lookup metrics

    pub fn increment_lookups_served(&self) {
        self.lookups_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_lookups_not_found(&self) {
        self.lookups_not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            translations_loaded: self.translations_loaded.load(Ordering::Relaxed),
            verses_loaded: self.verses_loaded.load(Ordering::Relaxed),
            malformed_lines: self.malformed_lines.load(Ordering::Relaxed),
            lookups_served: self.lookups_served.load(Ordering::Relaxed),
            lookups_not_found: self.lookups_not_found.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub translations_loaded: u64,
    pub verses_loaded: u64,
    pub malformed_lines: u64,
    pub lookups_served: u64,
    pub lookups_not_found: u64,
}
