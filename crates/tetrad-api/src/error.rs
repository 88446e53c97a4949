use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tetrad_core::error::CoreError;
use tetrad_interpret::InterpretError;
use tetrad_scoring::ScoringError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
#[allow(dead_code)]
pub enum ApiError {
    BadRequest(String),
    /// The response set is incomplete; carries the unanswered item ids so
    /// the client can route back to the questionnaire.
    MissingResponses(Vec<String>),
    /// Upstream interpretation failure. Recoverable: the numeric results
    /// stay valid without an interpretation.
    InterpretationFailed(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<String>>,
}

impl ErrorBody {
    fn new(error: String) -> Self {
        Self {
            error,
            missing: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            ApiError::MissingResponses(missing) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: format!("response set is missing {} answer(s)", missing.len()),
                    missing: Some(missing),
                },
            ),
            ApiError::InterpretationFailed(msg) => {
                tracing::warn!("interpretation failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::new(
                        "interpretation is currently unavailable; scores remain valid".to_string(),
                    ),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("internal server error".to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::MissingResponse { missing } => ApiError::MissingResponses(missing),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<InterpretError> for ApiError {
    fn from(e: InterpretError) -> Self {
        ApiError::InterpretationFailed(e.to_string())
    }
}
