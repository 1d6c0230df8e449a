//! Response DTOs for the cache sidecar API

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheStats, SessionStats};

/// Response body for value lookups
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for stores
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// Key pushed out to make room, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<String>,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            evicted: None,
        }
    }

    pub fn with_evicted(mut self, evicted: Option<String>) -> Self {
        self.evicted = evicted;
        self
    }
}

/// Response body for single-key deletes
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for clears
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Number of entries removed
    pub cleared: usize,
}

/// One entry in an LRU listing
#[derive(Debug, Clone, Serialize)]
pub struct ListedEntry {
    pub key: String,
    pub value: Value,
}

/// Response body for `GET /lru/:name`
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub cache: String,
    pub capacity: usize,
    pub size: usize,
    /// Least recently used first
    pub entries: Vec<ListedEntry>,
}

/// Counters for one cache, with the derived hit rate
#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsView {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub responses: StatsView,
    pub images: StatsView,
    pub api: StatsView,
    pub metadata: StatsView,
}

impl From<SessionStats> for StatsResponse {
    fn from(stats: SessionStats) -> Self {
        Self {
            responses: stats.responses.into(),
            images: stats.images.into(),
            api: stats.api.into(),
            metadata: stats.metadata.into(),
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_response_omits_missing_eviction() {
        let resp = SetResponse::new("movie-1");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("evicted").is_none());
        assert!(json["message"].as_str().unwrap().contains("movie-1"));
    }

    #[test]
    fn test_set_response_reports_eviction() {
        let resp = SetResponse::new("movie-51").with_evicted(Some("movie-1".to_string()));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["evicted"], "movie-1");
    }

    #[test]
    fn test_get_response_keeps_json_value() {
        let resp = GetResponse::new("/movie/550", json!({"id": 550}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["value"]["id"], 550);
    }

    #[test]
    fn test_stats_view_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            ..CacheStats::default()
        };
        let view = StatsView::from(stats);
        assert!((view.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
