//! Cache Entry Module
//!
//! Defines the structure for individual TTL cache entries.

// == TTL Entry ==
/// A value stamped with its insertion time and lifetime.
#[derive(Debug, Clone)]
pub struct TtlEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Lifetime in milliseconds
    pub ttl_ms: u64,
}

impl<V> TtlEntry<V> {
    // == Constructor ==
    /// Creates a new entry stored at `now_ms` that lives for `ttl_secs` seconds.
    pub fn new(value: V, now_ms: u64, ttl_secs: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
            ttl_ms: ttl_secs.saturating_mul(1000),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now_ms`.
    ///
    /// An entry stays readable while `now - stored_at <= ttl`. The exact
    /// boundary instant is still fresh; one millisecond later it is not.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds, saturating at 0.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        let expires_at = self.stored_at.saturating_add(self.ttl_ms);
        expires_at.saturating_sub(now_ms)
    }

    /// Returns the remaining lifetime in whole seconds.
    pub fn ttl_remaining(&self, now_ms: u64) -> u64 {
        self.ttl_remaining_ms(now_ms) / 1000
    }
}
