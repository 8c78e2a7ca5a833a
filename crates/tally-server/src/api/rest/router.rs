//! Router creation and configuration.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, method, not_found};
use super::types::AppState;
use tally_core::ScoringBackend;

/// Create the REST API router.
pub fn create_router(backend: Arc<dyn ScoringBackend>) -> Router {
    let state = AppState { backend };

    Router::new()
        .route("/health", get(health))
        .route("/method", post(method))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
