//! Cache Module
//!
//! In-memory session caches: a TTL response cache and an LRU bounded cache.

mod clock;
mod entry;
mod lru;
mod recency;
mod session;
mod stats;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::TtlEntry;
pub use lru::LruCache;
pub use recency::RecencyTracker;
pub use session::{SessionCaches, SessionStats, Shared};
pub use stats::CacheStats;
pub use ttl::TtlCache;

// == Public Constants ==
/// TTL applied when a caller doesn't pass one
pub const DEFAULT_TTL_SECS: u64 = 300;

/// TTL for successful GET responses cached by the request look-aside
pub const RESPONSE_TTL_SECS: u64 = 300;

/// Capacity used by `LruCache::default()`
pub const DEFAULT_LRU_CAPACITY: usize = 100;

/// Capacity of the image URL cache
pub const IMAGE_CACHE_CAPACITY: usize = 50;

/// Capacity of the API payload cache
pub const API_CACHE_CAPACITY: usize = 100;

/// Capacity of the metadata cache
pub const METADATA_CACHE_CAPACITY: usize = 200;
