//! Authentication gate
//!
//! Axum extractor that turns the `Authorization: Bearer <token>` header into
//! a verified identity. The decision is pure given the header, the clock and
//! the signing key:
//!
//! - no header at all: 401, "Access denied. No token."
//! - header present but unusable or failing verification: 403, "Invalid token"
//! - otherwise the decoded claims are handed to the handler.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated identity extracted from a verified token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    /// Username as of token issuance; may lag behind a rename.
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A missing header is the only path to 401; everything else is a
        // presented-but-rejected token.
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(ApiError::Unauthenticated);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::InvalidToken)?;

        let claims = app_state
            .jwt()
            .verify(token)
            .map_err(|_| ApiError::InvalidToken)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }
}
