//! # API Errors
//!
//! Error taxonomy for the REST surface. Every failure serializes to the
//! same body shape: `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required dive field is absent (or JSON null) in the payload
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Payload has all required fields but does not deserialize
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The id does not resolve to a dive
    #[error("Dive not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Persistence failure, reported with the engine's message text
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
