//! Reel Cache - session caches for a movie and TV catalog client
//!
//! A TTL response cache and an LRU bounded cache, look-aside helpers built on
//! them, and an HTTP sidecar that serves one session's caches.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookaside;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
