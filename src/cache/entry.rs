//! Cache Entry Module
//!
//! Defines the structure for individual cached upstream responses.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached upstream payload with its storage timestamp.
///
/// Entries carry no expiry of their own; the cache applies a uniform TTL
/// against `stored_at` at lookup time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached JSON payload, returned verbatim on a hit
    pub payload: Value,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
