//! API Handlers
//!
//! HTTP request handlers for each sidecar endpoint.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{LruCache, SessionCaches};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, ListedEntry, ListingResponse,
    SetLruRequest, SetResponse, SetResponseRequest, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub caches: SessionCaches,
}

impl AppState {
    pub fn new(caches: SessionCaches) -> Self {
        Self { caches }
    }

    /// Builds fresh session caches sized by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SessionCaches::from_config(config))
    }
}

/// The LRU caches addressable under `/lru/:name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LruName {
    Images,
    Api,
    Metadata,
}

impl FromStr for LruName {
    type Err = CacheError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "images" => Ok(LruName::Images),
            "api" => Ok(LruName::Api),
            "metadata" => Ok(LruName::Metadata),
            other => Err(CacheError::UnknownCache(other.to_string())),
        }
    }
}

// == Response (TTL) cache ==

/// Handler for PUT /responses
pub async fn set_response_handler(
    State(state): State<AppState>,
    Json(req): Json<SetResponseRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state
        .caches
        .responses
        .write()
        .await
        .set(req.key.clone(), req.value, req.ttl);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /responses/:key
///
/// Takes the write lock: a stale entry is removed by the read.
pub async fn get_response_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.caches.responses.write().await.get(&key).cloned();

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /responses/:key
///
/// Succeeds whether or not the key was present.
pub async fn delete_response_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    state.caches.responses.write().await.delete(&key);
    Json(DeleteResponse::new(key))
}

/// Handler for DELETE /responses
pub async fn clear_responses_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.caches.responses.write().await.clear();
    Json(ClearResponse { cleared })
}

// == LRU caches ==

/// Handler for PUT /lru/:name
///
/// The images cache stores URL strings, so it rejects any other JSON value.
pub async fn set_lru_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<SetLruRequest>,
) -> Result<Json<SetResponse>> {
    let cache: LruName = name.parse()?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let evicted = match cache {
        LruName::Images => {
            let Value::String(url) = req.value else {
                return Err(CacheError::InvalidRequest(
                    "images cache only stores string URLs".to_string(),
                ));
            };
            state
                .caches
                .images
                .write()
                .await
                .set(req.key.clone(), url)
                .map(|(key, _)| key)
        }
        LruName::Api => state
            .caches
            .api
            .write()
            .await
            .set(req.key.clone(), req.value)
            .map(|(key, _)| key),
        LruName::Metadata => state
            .caches
            .metadata
            .write()
            .await
            .set(req.key.clone(), req.value)
            .map(|(key, _)| key),
    };

    Ok(Json(SetResponse::new(req.key).with_evicted(evicted)))
}

/// Handler for GET /lru/:name/:key
///
/// A hit promotes the key to most recently used.
pub async fn get_lru_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let value = match name.parse::<LruName>()? {
        LruName::Images => state
            .caches
            .images
            .write()
            .await
            .get(&key)
            .cloned()
            .map(Value::String),
        LruName::Api => state.caches.api.write().await.get(&key).cloned(),
        LruName::Metadata => state.caches.metadata.write().await.get(&key).cloned(),
    };

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for DELETE /lru/:name/:key
pub async fn delete_lru_handler(
    State(state): State<AppState>,
    Path((name, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    let removed = match name.parse::<LruName>()? {
        LruName::Images => state.caches.images.write().await.delete(&key),
        LruName::Api => state.caches.api.write().await.delete(&key),
        LruName::Metadata => state.caches.metadata.write().await.delete(&key),
    };

    if removed {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(key))
    }
}

/// Handler for GET /lru/:name
///
/// Lists entries least recently used first. Listing does not promote.
pub async fn list_lru_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ListingResponse>> {
    let listing = match name.parse::<LruName>()? {
        LruName::Images => {
            let cache = state.caches.images.read().await;
            list_entries(&name, &*cache, |url| Value::String(url.clone()))
        }
        LruName::Api => list_entries(&name, &*state.caches.api.read().await, Value::clone),
        LruName::Metadata => {
            list_entries(&name, &*state.caches.metadata.read().await, Value::clone)
        }
    };

    Ok(Json(listing))
}

fn list_entries<V>(
    name: &str,
    cache: &LruCache<V>,
    to_json: impl Fn(&V) -> Value,
) -> ListingResponse {
    ListingResponse {
        cache: name.to_string(),
        capacity: cache.capacity(),
        size: cache.len(),
        entries: cache
            .entries()
            .map(|(key, value)| ListedEntry {
                key: key.to_string(),
                value: to_json(value),
            })
            .collect(),
    }
}

/// Handler for DELETE /lru/:name
pub async fn clear_lru_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ClearResponse>> {
    let cleared = match name.parse::<LruName>()? {
        LruName::Images => state.caches.images.write().await.clear(),
        LruName::Api => state.caches.api.write().await.clear(),
        LruName::Metadata => state.caches.metadata.write().await.clear(),
    };

    Ok(Json(ClearResponse { cleared }))
}

// == Session-wide ==

/// Handler for DELETE /caches
///
/// Every consumer of the session sees the caches empty afterwards.
pub async fn clear_all_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.caches.clear_all().await;
    Json(ClearResponse { cleared })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.caches.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
