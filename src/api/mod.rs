//! API Module
//!
//! HTTP handlers and routing for the cache sidecar.
//!
//! # Endpoints
//! - `PUT /responses` - Store an API response with optional TTL
//! - `GET /responses/:key` - Retrieve a fresh response
//! - `DELETE /responses/:key` - Delete a response
//! - `DELETE /responses` - Clear the response cache
//! - `PUT /lru/:name` - Store into the `images`, `api`, or `metadata` cache
//! - `GET /lru/:name` - List a cache, least recently used first
//! - `GET /lru/:name/:key` - Retrieve and promote a value
//! - `DELETE /lru/:name/:key` - Delete a value
//! - `DELETE /lru/:name` - Clear one LRU cache
//! - `DELETE /caches` - Clear every cache in the session
//! - `GET /stats` - Per-cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
