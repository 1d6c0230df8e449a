//! Request DTOs for the cache sidecar API

use serde::Deserialize;
use serde_json::Value;

/// Longest key accepted over HTTP, in bytes. Request keys embed a URL and
/// its query, so this is generous.
pub const MAX_KEY_LENGTH: usize = 2048;

/// Request body for `PUT /responses`
#[derive(Debug, Clone, Deserialize)]
pub struct SetResponseRequest {
    /// The cache key, usually built from a request URL and its query
    pub key: String,
    /// The response body to store
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetResponseRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for `PUT /lru/:name`
#[derive(Debug, Clone, Deserialize)]
pub struct SetLruRequest {
    pub key: String,
    pub value: Value,
}

impl SetLruRequest {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
