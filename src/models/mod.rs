//! Request and Response models for the cache sidecar API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{SetLruRequest, SetResponseRequest, MAX_KEY_LENGTH};
pub use responses::{
    ClearResponse, DeleteResponse, GetResponse, HealthResponse, ListedEntry, ListingResponse,
    SetResponse, StatsResponse, StatsView,
};
