//! Health and catalogue endpoints.

use axum::{extract::State, Json};
use hiringbrand_common::{default_dimensions, Dimension};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub stored_comparisons: usize,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        stored_comparisons: state.source.list_comparisons().len(),
    })
}

/// GET /api/dimensions — Default dimension catalogue
pub async fn api_dimensions() -> Json<Vec<Dimension>> {
    Json(default_dimensions())
}
