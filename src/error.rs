//! Application error types and HTTP response conversion.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application error type.
///
/// `Validation` and `UserNotFound` are expected outcomes produced and
/// consumed inside handlers; `Internal` covers everything unexpected and is
/// never shown to the caller beyond an opaque body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("User not found")]
    UserNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for the application.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::UserNotFound => (StatusCode::NOT_FOUND, "User not found").into_response(),
            Self::Internal(ref cause) => {
                error!(error = %cause, "Internal error");
                internal_error_response()
            }
        }
    }
}

/// The uniform opaque response for unexpected failures.
///
/// Shared with the error-handling middleware so the body is identical no
/// matter which boundary produced it.
pub(crate) fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error." })),
    )
        .into_response()
}
