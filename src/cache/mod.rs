//! Cache Module
//!
//! Provides in-memory memoization of upstream responses with lazy TTL
//! expiry and FIFO capacity eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default number of cached responses before FIFO eviction kicks in
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Default time-to-live for cached responses
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
