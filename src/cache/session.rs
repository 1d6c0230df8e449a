//! Session Caches
//!
//! The set of caches one client session shares. Built once by whoever owns
//! the session and handed out by cloning; clones point at the same caches.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheStats, LruCache, TtlCache};
use crate::config::Config;

/// Shared, lockable handle to a cache.
pub type Shared<T> = Arc<RwLock<T>>;

// == Session Caches ==
#[derive(Debug, Clone)]
pub struct SessionCaches {
    /// API responses keyed by request, expiring after a TTL
    pub responses: Shared<TtlCache<Value>>,
    /// Image URLs
    pub images: Shared<LruCache<String>>,
    /// Prefetched API payloads (detail records, popular lists)
    pub api: Shared<LruCache<Value>>,
    /// Metadata such as genre lists
    pub metadata: Shared<LruCache<Value>>,
}

impl SessionCaches {
    /// Creates empty caches sized by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            responses: Arc::new(RwLock::new(TtlCache::with_default_ttl(config.default_ttl))),
            images: Arc::new(RwLock::new(LruCache::new(config.image_cache_capacity))),
            api: Arc::new(RwLock::new(LruCache::new(config.api_cache_capacity))),
            metadata: Arc::new(RwLock::new(LruCache::new(config.metadata_cache_capacity))),
        }
    }

    /// Empties every cache and returns the total number of entries removed.
    pub async fn clear_all(&self) -> usize {
        let mut removed = self.responses.write().await.clear();
        removed += self.images.write().await.clear();
        removed += self.api.write().await.clear();
        removed += self.metadata.write().await.clear();
        removed
    }

    /// Snapshot of statistics for all four caches.
    pub async fn stats(&self) -> SessionStats {
        SessionStats {
            responses: self.responses.read().await.stats(),
            images: self.images.read().await.stats(),
            api: self.api.read().await.stats(),
            metadata: self.metadata.read().await.stats(),
        }
    }
}

impl Default for SessionCaches {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Per-cache statistics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SessionStats {
    pub responses: CacheStats,
    pub images: CacheStats,
    pub api: CacheStats,
    pub metadata: CacheStats,
}
