//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    differentiation::{api_differentiation, api_comparisons, api_comparison_differentiation},
    system::{health, api_dimensions},
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health))

        // API endpoints
        .route("/api/dimensions",      get(api_dimensions))
        .route("/api/differentiation", post(api_differentiation))
        .route("/api/comparisons",     get(api_comparisons))
        .route("/api/comparisons/{id}/differentiation", get(api_comparison_differentiation))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
