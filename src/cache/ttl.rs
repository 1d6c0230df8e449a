//! TTL Cache Module
//!
//! Keyed store whose entries go stale after a per-entry time-to-live.
//! Expiration is checked lazily on read; nothing is removed in the background
//! unless a caller runs [`TtlCache::purge_expired`].

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, Clock, SystemClock, TtlEntry, DEFAULT_TTL_SECS};

// == TTL Cache ==
/// Look-aside cache with per-entry expiration.
///
/// Growth is unbounded: entries leave only on an expired read, an explicit
/// delete, a clear, or a sweep.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    entries: HashMap<String, TtlEntry<V>>,
    stats: CacheStats,
    /// TTL in seconds used when `set` gets `None`
    default_ttl: u64,
    clock: C,
}

impl<V> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache with a 300 second default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL_SECS)
    }

    /// Creates an empty cache with the given default TTL in seconds.
    pub fn with_default_ttl(default_ttl: u64) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl: u64, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, restarting its lifetime.
    ///
    /// `ttl_secs` of `None` uses the cache's default TTL.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_secs: Option<u64>) {
        let ttl = ttl_secs.unwrap_or(self.default_ttl);
        let entry = TtlEntry::new(value, self.clock.now_ms(), ttl);
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the value for `key` if it is present and fresh.
    ///
    /// A stale entry is removed as a side effect and reads as absent.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let now = self.clock.now_ms();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_miss();
            self.stats.record_expirations(1);
            debug!(key, "ttl entry expired on read");
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Has ==
    /// Same as `get(key).is_some()`, including the removal of a stale entry.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Delete ==
    /// Removes `key`. Absent keys are ignored.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    // == Length ==
    /// Number of stored entries, counting stale ones not yet read or swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn default_ttl(&self) -> u64 {
        self.default_ttl
    }

    /// Remaining whole seconds for a fresh entry. Does not remove stale ones.
    pub fn ttl_remaining(&self, key: &str) -> Option<u64> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.ttl_remaining(now))
    }

    // == Purge Expired ==
    /// Removes all stale entries and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
