//! Account routes
//!
//! Registration and login are public; the update endpoints require a
//! bearer token and act on the identity carried by it.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::AccountService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use storefront_shared::types::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdatePasswordRequest,
    UpdateUsernameRequest,
};

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/update-username", post(update_username))
        .route("/update-password", post(update_password))
}

/// Register a new user
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response =
        AccountService::register(&state.db, state.passwords(), req.username, req.password).await?;
    Ok(Json(response))
}

/// Login with username and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AccountService::login(
        &state.db,
        state.jwt(),
        state.passwords(),
        req.username,
        req.password,
    )
    .await?;
    Ok(Json(response))
}

/// Change the caller's username
///
/// POST /update-username (requires Bearer token)
async fn update_username(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<UpdateUsernameRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = AccountService::update_username(&state.db, &auth_user, req.username).await?;
    Ok(Json(response))
}

/// Change the caller's password
///
/// POST /update-password (requires Bearer token)
async fn update_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response =
        AccountService::update_password(&state.db, state.passwords(), &auth_user, req.password)
            .await?;
    Ok(Json(response))
}
