//! Differentiation API — scores comparisons using the ranker engine.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use hiringbrand_common::Comparison;
use hiringbrand_ranker::{analyse_comparison, ComparisonAnalysis};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct DifferentiationResponse {
    #[serde(flatten)]
    pub analysis: ComparisonAnalysis,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonList {
    pub comparisons: Vec<String>,
}

fn score(state: &SharedState, comparison: &Comparison) -> Result<DifferentiationResponse, ApiError> {
    comparison.validate()?;
    let analysis = analyse_comparison(comparison, &state.config)?;
    Ok(DifferentiationResponse {
        analysis,
        generated_at: Utc::now(),
    })
}

/// POST /api/differentiation — Score a posted comparison
pub async fn api_differentiation(
    State(state): State<SharedState>,
    payload: Result<Json<Comparison>, JsonRejection>,
) -> Result<Json<DifferentiationResponse>, ApiError> {
    let Json(comparison) = payload?;
    tracing::info!(
        employers = comparison.employers.len(),
        "scoring posted comparison"
    );
    Ok(Json(score(&state, &comparison)?))
}

/// GET /api/comparisons — List stored comparison ids
pub async fn api_comparisons(State(state): State<SharedState>) -> Json<ComparisonList> {
    Json(ComparisonList {
        comparisons: state.source.list_comparisons(),
    })
}

/// GET /api/comparisons/{id}/differentiation — Score a stored comparison
pub async fn api_comparison_differentiation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<DifferentiationResponse>, ApiError> {
    let comparison = state.source.require_comparison(&id)?;
    let mut response = score(&state, &comparison)?;
    if response.analysis.report_id.is_none() {
        response.analysis.report_id = Some(id);
    }
    Ok(Json(response))
}
