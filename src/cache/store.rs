//! Response Cache Module
//!
//! Time-boxed memoization of upstream responses, keyed by the serialized
//! query parameters. Expiry is lazy (checked at lookup only) and the
//! capacity bound is FIFO by insertion order: the oldest-inserted entry is
//! dropped when an insert breaches the bound, irrespective of how recently
//! it was read.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// In-memory cache of upstream JSON payloads with TTL and a FIFO size cap.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order, front = oldest. Lookups never reorder.
    order: VecDeque<String>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Entry time-to-live
    ttl: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and TTL.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
        }
    }

    // == Lookup ==
    /// Returns the cached payload for `key`, or None.
    ///
    /// An entry whose age has reached the TTL is removed here and treated
    /// as absent; there is no background sweep.
    pub fn lookup(&mut self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.age_ms() >= self.ttl.as_millis() as u64 {
                self.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                return None;
            }

            self.stats.record_hit();
            Some(entry.payload.clone())
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Store ==
    /// Stores a payload under `key`, stamping the current time.
    ///
    /// Overwriting an existing key refreshes its timestamp but keeps its
    /// original insertion position. If the insert pushes the cache past
    /// capacity, the oldest-inserted entry is evicted.
    pub fn store(&mut self, key: String, payload: Value) {
        let was_present = self
            .entries
            .insert(key.clone(), CacheEntry::new(payload))
            .is_some();

        if !was_present {
            self.order.push_back(key);
        }

        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
            }
        }

        self.stats.set_entries(self.entries.len());
    }

    // == Remove ==
    /// Drops an entry and its position in the insertion queue.
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.retain(|k| k != key);
        self.stats.set_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Contains ==
    /// Checks whether a key is currently cached (without expiry handling).
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;

    fn cache() -> ResponseCache {
        ResponseCache::new(100, Duration::from_secs(300))
    }

    #[test]
    fn test_cache_new() {
        let cache = cache();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lookup_unseen_key_absent() {
        let mut cache = cache();
        assert!(cache.lookup("q=pikachu").is_none());
    }

    #[test]
    fn test_store_then_lookup_roundtrip() {
        let mut cache = cache();
        let payload = json!({"data": [{"id": "xy1-1"}], "count": 1});

        cache.store("q=pikachu".to_string(), payload.clone());

        assert_eq!(cache.lookup("q=pikachu"), Some(payload));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_overwrites() {
        let mut cache = cache();

        cache.store("k".to_string(), json!(1));
        cache.store("k".to_string(), json!(2));

        assert_eq!(cache.lookup("k"), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_removed_on_lookup() {
        let mut cache = ResponseCache::new(100, Duration::from_millis(50));

        cache.store("k".to_string(), json!("v"));
        sleep(Duration::from_millis(60));

        assert!(cache.lookup("k").is_none());
        // Removed, not just hidden
        assert!(!cache.contains("k"));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_expiry_only_on_lookup_of_that_key() {
        let mut cache = ResponseCache::new(100, Duration::from_millis(50));

        cache.store("stale".to_string(), json!(1));
        sleep(Duration::from_millis(60));
        cache.store("fresh".to_string(), json!(2));

        // No sweep: the stale entry still occupies a slot until looked up
        assert_eq!(cache.len(), 2);
        assert!(cache.lookup("stale").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest_inserted() {
        let mut cache = ResponseCache::new(3, Duration::from_secs(300));

        cache.store("a".to_string(), json!(1));
        cache.store("b".to_string(), json!(2));
        cache.store("c".to_string(), json!(3));
        cache.store("d".to_string(), json!(4));

        assert_eq!(cache.len(), 3);
        assert!(cache.lookup("a").is_none());
        assert!(cache.lookup("b").is_some());
        assert!(cache.lookup("c").is_some());
        assert!(cache.lookup("d").is_some());
    }

    #[test]
    fn test_eviction_is_fifo_not_lru() {
        let mut cache = ResponseCache::new(3, Duration::from_secs(300));

        cache.store("a".to_string(), json!(1));
        cache.store("b".to_string(), json!(2));
        cache.store("c".to_string(), json!(3));

        // Reading "a" must not protect it: insertion order decides
        assert!(cache.lookup("a").is_some());
        cache.store("d".to_string(), json!(4));

        assert!(cache.lookup("a").is_none());
        assert!(cache.lookup("b").is_some());
    }

    #[test]
    fn test_overwrite_keeps_insertion_position() {
        let mut cache = ResponseCache::new(3, Duration::from_secs(300));

        cache.store("a".to_string(), json!(1));
        cache.store("b".to_string(), json!(2));
        cache.store("c".to_string(), json!(3));
        // Overwriting "a" does not move it to the back of the queue
        cache.store("a".to_string(), json!(10));
        cache.store("d".to_string(), json!(4));

        assert!(cache.lookup("a").is_none());
        assert!(cache.lookup("b").is_some());
    }

    #[test]
    fn test_hundred_and_first_key_capped_at_hundred() {
        let mut cache = cache();

        for i in 0..101 {
            cache.store(format!("key{}", i), json!(i));
        }

        assert_eq!(cache.len(), 100);
        assert!(cache.lookup("key0").is_none());
        assert!(cache.lookup("key1").is_some());
        assert!(cache.lookup("key100").is_some());
    }

    #[test]
    fn test_stats_track_hits_misses_evictions() {
        let mut cache = ResponseCache::new(1, Duration::from_secs(300));

        cache.store("a".to_string(), json!(1));
        let _ = cache.lookup("a"); // hit
        let _ = cache.lookup("b"); // miss
        cache.store("c".to_string(), json!(2)); // evicts "a"

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 1);
    }
}
