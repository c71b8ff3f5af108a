//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to appropriate HTTP responses. Every error response is
//! JSON of the shape `{"message": "..."}`; unexpected failures collapse to
//! an opaque 500 with the cause logged server-side only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use storefront_shared::types::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field was absent or empty.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Duplicate username at write time.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request carried no bearer token at all.
    #[error("Access denied. No token.")]
    Unauthenticated,

    /// A token was presented but failed verification.
    #[error("Invalid token")]
    InvalidToken,

    /// Bad credentials at login. Deliberately the same for an unknown
    /// username and a wrong password.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Access denied. No token.".to_string(),
            ),
            ApiError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// True when the error is a unique-constraint violation.
///
/// Username uniqueness is guaranteed by the database index rather than a
/// check-then-insert, so this is how a duplicate registration surfaces.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
