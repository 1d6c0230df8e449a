//! Look-aside Helpers
//!
//! Consult a cache before doing the real work, and store the result only when
//! the work succeeded.
//!
//! - [`ResponseCache`] caches API responses keyed by request URL and query.
//! - [`Prefetcher`] guards hover prefetches so each detail record is fetched
//!   once per session.

use std::fmt;
use std::future::Future;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::{Clock, LruCache, Shared, SystemClock, TtlCache, RESPONSE_TTL_SECS};

// == Request Keys ==
/// Builds the cache key for a request: the URL, then the query parameters as
/// a JSON object with sorted keys. Parameter order never changes the key.
pub fn request_key<K, V>(url: &str, params: impl IntoIterator<Item = (K, V)>) -> String
where
    K: Into<String>,
    V: Into<Value>,
{
    let query: Map<String, Value> = params
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();

    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, Value::Object(query))
    }
}

// == Prefetch Keys ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    All,
    Movie,
    Tv,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaType::All => "all",
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        };
        f.write_str(name)
    }
}

/// What a prefetch is for. Displays as the cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefetchKey {
    Movie(u64),
    Series(u64),
    PopularMovies,
    UpcomingMovies,
    PopularSeries,
    Search(String),
    Trending(MediaType),
}

impl PrefetchKey {
    /// Searches for blank queries are never worth fetching.
    fn is_blank(&self) -> bool {
        matches!(self, PrefetchKey::Search(query) if query.trim().is_empty())
    }
}

impl fmt::Display for PrefetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefetchKey::Movie(id) => write!(f, "movie-{}", id),
            PrefetchKey::Series(id) => write!(f, "series-{}", id),
            PrefetchKey::PopularMovies => f.write_str("movies-popular"),
            PrefetchKey::UpcomingMovies => f.write_str("movies-upcoming"),
            PrefetchKey::PopularSeries => f.write_str("series-popular"),
            PrefetchKey::Search(query) => write!(f, "search-{}", query),
            PrefetchKey::Trending(media) => write!(f, "trending-{}", media),
        }
    }
}

// == Response Cache ==
/// Look-aside over a shared TTL cache.
#[derive(Debug)]
pub struct ResponseCache<V, C = SystemClock> {
    cache: Shared<TtlCache<V, C>>,
    ttl: u64,
}

impl<V, C> Clone for ResponseCache<V, C> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            ttl: self.ttl,
        }
    }
}

impl<V: Clone, C: Clock> ResponseCache<V, C> {
    /// Wraps `cache`, storing fetched responses for 300 seconds.
    pub fn new(cache: Shared<TtlCache<V, C>>) -> Self {
        Self::with_ttl(cache, RESPONSE_TTL_SECS)
    }

    pub fn with_ttl(cache: Shared<TtlCache<V, C>>, ttl: u64) -> Self {
        Self { cache, ttl }
    }

    /// Returns the cached response for `key`, or runs `fetch` and caches its
    /// result.
    ///
    /// A failed fetch is returned to the caller and leaves the cache untouched.
    /// The lock is not held while fetching, so two concurrent misses on the
    /// same key both fetch.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let cached = self.cache.write().await.get(key).cloned();
        if let Some(value) = cached {
            debug!(key, "response cache hit");
            return Ok(value);
        }

        let value = fetch().await?;
        self.cache
            .write()
            .await
            .set(key, value.clone(), Some(self.ttl));
        Ok(value)
    }

    /// Drops the cached response for `key`.
    pub async fn invalidate(&self, key: &str) {
        self.cache.write().await.delete(key);
    }
}

// == Prefetcher ==
/// Fetch-once guard over a shared LRU cache.
#[derive(Debug)]
pub struct Prefetcher<V> {
    cache: Shared<LruCache<V>>,
}

impl<V> Clone for Prefetcher<V> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<V> Prefetcher<V> {
    pub fn new(cache: Shared<LruCache<V>>) -> Self {
        Self { cache }
    }

    /// Fetches and stores `key` unless it is already cached.
    ///
    /// Returns whether a new entry was stored. Failures are logged and
    /// swallowed; nothing is cached for them.
    pub async fn prefetch<F, Fut, E>(&self, key: &PrefetchKey, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: fmt::Display,
    {
        if key.is_blank() {
            return false;
        }

        let key = key.to_string();
        if self.cache.read().await.has(&key) {
            return false;
        }

        match fetch().await {
            Ok(value) => {
                self.cache.write().await.set(key, value);
                true
            }
            Err(err) => {
                debug!(key = %key, error = %err, "prefetch failed");
                false
            }
        }
    }

    /// Returns a prefetched value, promoting it.
    pub async fn get(&self, key: &PrefetchKey) -> Option<V>
    where
        V: Clone,
    {
        self.cache.write().await.get(&key.to_string()).cloned()
    }

    /// Empties the prefetch cache and returns how many entries it held.
    pub async fn clear(&self) -> usize {
        self.cache.write().await.clear()
    }
}
