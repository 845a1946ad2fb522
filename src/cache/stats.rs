//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, lazy expirations and rejected sets.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that returned a value
    pub hits: u64,
    /// Number of `get` calls that failed (key not found or expired)
    pub misses: u64,
    /// Number of entries removed because they were found expired
    pub expirations: u64,
    /// Number of `set` calls rejected because the key was live
    pub rejected_sets: u64,
    /// Current number of entries in the store, expired or not
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Counters ==
/// Lock-free counters, updated from both shared and exclusive lock paths.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    expirations: AtomicU64,
    rejected_sets: AtomicU64,
}

impl Counters {
    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_expirations(&self, count: u64) {
        self.expirations.fetch_add(count, Ordering::AcqRel);
    }

    pub(crate) fn record_rejected_set(&self) {
        self.rejected_sets.fetch_add(1, Ordering::AcqRel);
    }

    /// Builds a snapshot with the given entry count.
    pub(crate) fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Acquire),
            misses: self.misses.load(Ordering::Acquire),
            expirations: self.expirations.load(Ordering::Acquire),
            rejected_sets: self.rejected_sets.load(Ordering::Acquire),
            total_entries,
        }
    }
}
