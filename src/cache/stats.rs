//! Cache Statistics Module
//!
//! Tracks response-cache metrics including hits, misses, expirations and
//! evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks response-cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups served from cache
    pub hits: u64,
    /// Number of lookups that went to the upstream (absent or expired)
    pub misses: u64,
    /// Number of entries dropped because their TTL had elapsed
    pub expirations: u64,
    /// Number of entries dropped by the FIFO capacity bound
    pub evictions: u64,
    /// Current number of cached responses
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

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

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Update Entry Count ==
    /// Updates the current entry count.
    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
