//! Mapping of ranker errors onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hiringbrand_common::HiringBrandError;
use serde::Serialize;

/// Error returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] HiringBrandError),

    /// Body that is not JSON or does not match the comparison schema
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

/// Body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        let err = match self {
            ApiError::InvalidRequest(_) => return (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::Domain(err) => err,
        };
        match err {
            HiringBrandError::EmptyDimensionSet => (StatusCode::BAD_REQUEST, "EMPTY_DIMENSION_SET"),
            HiringBrandError::InvalidScore { .. } => (StatusCode::BAD_REQUEST, "INVALID_SCORE"),
            HiringBrandError::InvalidEmployer(_) => (StatusCode::BAD_REQUEST, "INVALID_EMPLOYER"),
            HiringBrandError::ComparisonNotFound(_) => {
                (StatusCode::NOT_FOUND, "COMPARISON_NOT_FOUND")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
