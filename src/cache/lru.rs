//! LRU Cache Module
//!
//! Fixed-capacity store that drops the least recently used key on overflow.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, RecencyTracker, DEFAULT_LRU_CAPACITY};

// == LRU Cache ==
/// Bounded cache with least-recently-used eviction.
///
/// Both `get` and `set` promote a key to most recently used. Iteration
/// (`keys`, `values`, `entries`) runs oldest-first.
#[derive(Debug)]
pub struct LruCache<V> {
    entries: HashMap<String, V>,
    recency: RecencyTracker,
    stats: CacheStats,
    capacity: usize,
}

impl<V> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyTracker::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Set ==
    /// Inserts or replaces `key` and makes it most recently used.
    ///
    /// If a new key pushes the cache over capacity, exactly one entry (the
    /// least recently used) is evicted and returned. Replacing an existing
    /// key never evicts.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<(String, V)> {
        let key = key.into();
        self.recency.touch(&key);
        self.entries.insert(key, value);

        if self.entries.len() <= self.capacity {
            return None;
        }

        let oldest = self.recency.pop_oldest()?;
        let evicted = self.entries.remove(&oldest)?;
        self.stats.record_eviction();
        debug!(key = %oldest, capacity = self.capacity, "evicted least recently used entry");
        Some((oldest, evicted))
    }

    // == Get ==
    /// Returns the value for `key` and promotes it. Misses have no side effects
    /// beyond the miss counter.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if !self.entries.contains_key(key) {
            self.stats.record_miss();
            return None;
        }

        self.recency.touch(key);
        self.stats.record_hit();
        self.entries.get(key)
    }

    /// Returns the value for `key` without promoting it.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    // == Has ==
    /// Existence check. Does not promote.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes `key`, returning whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.recency.remove(key);
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.recency.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys, least recently used first.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.recency.iter()
    }

    /// Values, least recently used first.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries().map(|(_, value)| value)
    }

    /// Key/value pairs, least recently used first.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.recency
            .iter()
            .filter_map(move |key| self.entries.get(key).map(|value| (key, value)))
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

impl<V> Default for LruCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_LRU_CAPACITY)
    }
}
