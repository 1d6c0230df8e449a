//! API Routes
//!
//! Configures the Axum router with all sidecar endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_all_handler, clear_lru_handler, clear_responses_handler, delete_lru_handler,
    delete_response_handler, get_lru_handler, get_response_handler, health_handler,
    list_lru_handler, set_lru_handler, set_response_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, since the browser front end is served elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/responses",
            put(set_response_handler).delete(clear_responses_handler),
        )
        .route(
            "/responses/:key",
            get(get_response_handler).delete(delete_response_handler),
        )
        .route(
            "/lru/:name",
            put(set_lru_handler)
                .get(list_lru_handler)
                .delete(clear_lru_handler),
        )
        .route(
            "/lru/:name/:key",
            get(get_lru_handler).delete(delete_lru_handler),
        )
        .route("/caches", delete(clear_all_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
