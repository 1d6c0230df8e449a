//! Configuration Module
//!
//! Handles loading and managing sidecar configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{
    API_CACHE_CAPACITY, DEFAULT_TTL_SECS, IMAGE_CACHE_CAPACITY, METADATA_CACHE_CAPACITY,
};

/// Cache sizing and server parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Default TTL in seconds for responses stored without an explicit TTL
    pub default_ttl: u64,
    /// Capacity of the image URL LRU cache
    pub image_cache_capacity: usize,
    /// Capacity of the API payload LRU cache
    pub api_cache_capacity: usize,
    /// Capacity of the metadata LRU cache
    pub metadata_cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between background sweeps of expired responses; 0 disables
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default response TTL in seconds (default: 300)
    /// - `IMAGE_CACHE_CAPACITY` - Image URL cache size (default: 50)
    /// - `API_CACHE_CAPACITY` - API payload cache size (default: 100)
    /// - `METADATA_CACHE_CAPACITY` - Metadata cache size (default: 200)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds, 0 = lazy expiry only (default: 0)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
            image_cache_capacity: env_or("IMAGE_CACHE_CAPACITY", defaults.image_cache_capacity),
            api_cache_capacity: env_or("API_CACHE_CAPACITY", defaults.api_cache_capacity),
            metadata_cache_capacity: env_or(
                "METADATA_CACHE_CAPACITY",
                defaults.metadata_cache_capacity,
            ),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            image_cache_capacity: IMAGE_CACHE_CAPACITY,
            api_cache_capacity: API_CACHE_CAPACITY,
            metadata_cache_capacity: METADATA_CACHE_CAPACITY,
            server_port: 3000,
            sweep_interval: 0,
        }
    }
}
