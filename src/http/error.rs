//! Error-to-status mapping at the handler boundary.
//!
//! # Design Decisions
//! - Validation failures return a short machine-oriented message; store
//!   failures return a generic body and the cause is only logged.
//! - Every handler returns `Result<_, ApiError>`; nothing escapes to
//!   terminate the process after startup.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::geometry::GeometryError;
use crate::store::StoreError;

/// Errors surfaced by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// The requested record (or its image) does not exist. Maps to 404.
    #[error("not found")]
    NotFound,

    /// The persistence layer failed. Maps to 500.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<GeometryError> for ApiError {
    fn from(err: GeometryError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Validation(format!("malformed multipart body: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                tracing::debug!(error = %message, "Request validation failed");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
            }
            ApiError::Store(cause) => {
                // Cause stays server-side; the client sees a generic body.
                tracing::error!(error = %cause, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
