//! Error types for the lease calculator server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lease_calculator::CalculationError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, field) = match &self {
            ServerError::Calculation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                err.code(),
                Some(err.field().to_string()),
            ),
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", None),
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
            field,
        };

        (status, Json(body)).into_response()
    }
}
