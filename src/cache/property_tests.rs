//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check expiration, eviction order, and clear semantics
//! against simple reference models.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::{LruCache, ManualClock, TtlCache};

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;
const START_MS: u64 = 1_700_000_000_000;

// == Strategies ==
/// Generates cache keys shaped like the ones the client uses
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..500).prop_map(|id| format!("movie-{}", id)),
        (1u32..500).prop_map(|id| format!("series-{}", id)),
        "[a-z]{1,8}".prop_map(|s| format!("search-{}", s)),
    ]
}

fn small_key_strategy() -> impl Strategy<Value = String> {
    "[a-f]".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum LruOp {
    Set { key: String, value: i32 },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
}

fn lru_op_strategy() -> impl Strategy<Value = LruOp> {
    prop_oneof![
        3 => (small_key_strategy(), any::<i32>()).prop_map(|(key, value)| LruOp::Set { key, value }),
        2 => small_key_strategy().prop_map(|key| LruOp::Get { key }),
        1 => small_key_strategy().prop_map(|key| LruOp::Has { key }),
        1 => small_key_strategy().prop_map(|key| LruOp::Delete { key }),
    ]
}

/// Reference LRU: a vector ordered oldest-first.
#[derive(Debug, Default)]
struct ModelLru {
    order: Vec<(String, i32)>,
    capacity: usize,
}

impl ModelLru {
    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|(k, _)| k == key)
    }

    fn set(&mut self, key: String, value: i32) {
        if let Some(i) = self.position(&key) {
            self.order.remove(i);
        }
        self.order.push((key, value));
        if self.order.len() > self.capacity {
            self.order.remove(0);
        }
    }

    fn get(&mut self, key: &str) -> Option<i32> {
        let i = self.position(key)?;
        let entry = self.order.remove(i);
        let value = entry.1;
        self.order.push(entry);
        Some(value)
    }

    fn delete(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.order.remove(i);
                true
            }
            None => false,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of operations, the LRU cache agrees with the reference
    // model on every result and on the oldest-first key order.
    #[test]
    fn prop_lru_matches_reference_model(
        capacity in 0usize..5,
        ops in prop::collection::vec(lru_op_strategy(), 1..80)
    ) {
        let mut cache = LruCache::new(capacity);
        let mut model = ModelLru { order: Vec::new(), capacity };

        for op in ops {
            match op {
                LruOp::Set { key, value } => {
                    cache.set(key.clone(), value);
                    model.set(key, value);
                }
                LruOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key).copied(), model.get(&key));
                }
                LruOp::Has { key } => {
                    prop_assert_eq!(cache.has(&key), model.position(&key).is_some());
                }
                LruOp::Delete { key } => {
                    prop_assert_eq!(cache.delete(&key), model.delete(&key));
                }
            }

            let actual: Vec<(String, i32)> = cache
                .entries()
                .map(|(k, v)| (k.to_string(), *v))
                .collect();
            prop_assert_eq!(&actual, &model.order);
        }
    }

    // The LRU cache never holds more than its capacity.
    #[test]
    fn prop_lru_capacity_enforcement(
        capacity in 1usize..60,
        keys in prop::collection::vec(key_strategy(), 1..200)
    ) {
        let mut cache = LruCache::new(capacity);

        for (i, key) in keys.into_iter().enumerate() {
            cache.set(key, i);
            prop_assert!(
                cache.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                cache.len(),
                capacity
            );
        }
    }

    // Filling to capacity with unique keys, then adding one more, evicts
    // exactly the first key inserted.
    #[test]
    fn prop_lru_evicts_oldest(keys in prop::collection::hash_set(key_strategy(), 2..20)) {
        let keys: Vec<String> = keys.into_iter().collect();
        let (newest, initial) = keys.split_last().unwrap();
        let mut cache = LruCache::new(initial.len());

        for key in initial {
            cache.set(key.clone(), ());
        }
        let evicted = cache.set(newest.clone(), ());

        prop_assert_eq!(evicted.map(|(k, _)| k), Some(initial[0].clone()));
        prop_assert_eq!(cache.len(), initial.len());
        prop_assert!(cache.has(newest));
    }

    // Reading or rewriting the oldest key saves it; the next oldest goes instead.
    #[test]
    fn prop_lru_promotion_protects_key(
        keys in prop::collection::hash_set(key_strategy(), 4..12),
        by_rewrite in any::<bool>()
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let (newest, initial) = keys.split_last().unwrap();
        let mut cache = LruCache::new(initial.len());

        for key in initial {
            cache.set(key.clone(), 0);
        }
        if by_rewrite {
            prop_assert!(cache.set(initial[0].clone(), 99).is_none());
        } else {
            prop_assert!(cache.get(&initial[0]).is_some());
        }
        let evicted = cache.set(newest.clone(), 1);

        prop_assert_eq!(evicted.map(|(k, _)| k), Some(initial[1].clone()));
        prop_assert!(cache.has(&initial[0]));
    }

    // A fresh TTL entry always reads back the latest value written.
    #[test]
    fn prop_ttl_overwrite_returns_latest(
        key in key_strategy(),
        values in prop::collection::vec(any::<i64>(), 1..10),
        ttl in 1u64..3600
    ) {
        let mut cache = TtlCache::with_clock(TEST_DEFAULT_TTL, ManualClock::new(START_MS));

        for value in &values {
            cache.set(key.clone(), *value, Some(ttl));
        }

        prop_assert_eq!(cache.get(&key).copied(), values.last().copied());
        prop_assert_eq!(cache.len(), 1);
    }

    // Entries are readable up to and including their TTL and absent after it.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        ttl in 0u64..600,
        extra_ms in 1u64..10_000
    ) {
        let clock = ManualClock::new(START_MS);
        let mut cache = TtlCache::with_clock(TEST_DEFAULT_TTL, clock.clone());
        cache.set(key.clone(), "payload", Some(ttl));

        clock.advance_secs(ttl);
        prop_assert!(cache.has(&key), "entry should be readable at exactly its ttl");

        clock.advance_ms(extra_ms);
        prop_assert!(cache.get(&key).is_none());
        prop_assert!(!cache.has(&key));
        prop_assert_eq!(cache.len(), 0);
    }

    // Clear always leaves both caches empty with every prior key absent.
    #[test]
    fn prop_clear_is_total(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut lru = LruCache::new(16);
        let mut ttl = TtlCache::with_clock(TEST_DEFAULT_TTL, ManualClock::new(START_MS));

        for key in &keys {
            lru.set(key.clone(), ());
            ttl.set(key.clone(), (), None);
        }
        lru.clear();
        ttl.clear();
        lru.clear();
        ttl.clear();

        prop_assert_eq!(lru.len(), 0);
        prop_assert_eq!(ttl.len(), 0);
        let unique: HashSet<&String> = keys.iter().collect();
        for key in unique {
            prop_assert!(lru.get(key).is_none());
            prop_assert!(ttl.get(key).is_none());
        }
    }
}

// == Error Response Format ==
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Every error becomes a JSON body with a string "error" field.
    #[test]
    fn prop_error_response_format(message in "[a-zA-Z0-9 _-]{1,100}") {
        use crate::error::CacheError;
        use axum::body::to_bytes;
        use axum::response::IntoResponse;

        let errors = vec![
            CacheError::NotFound(message.clone()),
            CacheError::UnknownCache(message.clone()),
            CacheError::InvalidRequest(message.clone()),
        ];

        let rt = tokio::runtime::Runtime::new().unwrap();
        for error in errors {
            let expected = error.to_string();
            let response = error.into_response();

            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            prop_assert!(content_type.contains("application/json"));

            let bytes = rt.block_on(async { to_bytes(response.into_body(), usize::MAX).await.unwrap() });
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            prop_assert_eq!(json["error"].as_str(), Some(expected.as_str()));
        }
    }
}

// == Concrete Scenarios ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_set_then_get_after_simulated_elapse() {
        let clock = ManualClock::new(START_MS);
        let mut cache = TtlCache::with_clock(TEST_DEFAULT_TTL, clock.clone());

        cache.set("k", "v", Some(1));
        assert_eq!(cache.get("k"), Some(&"v"));

        clock.advance_ms(1_100);
        assert_eq!(cache.get("k"), None);
        assert!(!cache.has("k"));
    }

    #[test]
    fn test_ttl_overwrite() {
        let mut cache = TtlCache::with_clock(TEST_DEFAULT_TTL, ManualClock::new(START_MS));

        cache.set("k", "v1", Some(10));
        cache.set("k", "v2", Some(10));

        assert_eq!(cache.get("k"), Some(&"v2"));
    }

    #[test]
    fn test_lru_capacity_two_scenarios() {
        // set a, b, c: a goes
        let mut cache = LruCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["b", "c"]);

        // get(a) before c: b goes
        let mut cache = LruCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.get("a");
        cache.set("c", 3);
        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["a", "c"]);

        // rewrite a before c: b goes, a keeps the new value
        let mut cache = LruCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 99);
        cache.set("c", 3);
        assert_eq!(
            cache.entries().collect::<Vec<_>>(),
            vec![("a", &99), ("c", &3)]
        );
    }

    #[test]
    fn test_clear_on_empty_and_populated() {
        let mut cache: LruCache<i32> = LruCache::new(4);
        cache.clear();
        assert_eq!(cache.len(), 0);

        cache.set("a", 1);
        cache.set("b", 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_fifty_one_movies_into_capacity_fifty() {
        let mut cache = LruCache::new(50);

        for id in 1..=51u32 {
            cache.set(format!("movie-{}", id), id);
        }

        assert_eq!(cache.len(), 50);
        let expected: Vec<String> = (2..=51).map(|id| format!("movie-{}", id)).collect();
        assert_eq!(cache.keys().collect::<Vec<_>>(), expected);
        assert!(!cache.has("movie-1"));
    }
}
