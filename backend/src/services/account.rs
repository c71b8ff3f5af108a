//! Account service: registration, login and credential updates
//!
//! Password hashing and verification are offloaded to the blocking thread
//! pool; token issuance uses the pre-computed keys from `AppState`.

use crate::auth::{AuthUser, JwtService, PasswordService};
use crate::error::{is_unique_violation, ApiError};
use crate::repositories::UserRepository;
use sqlx::PgPool;
use storefront_shared::types::{LoginResponse, MessageResponse};

/// Account service for authentication operations
pub struct AccountService;

impl AccountService {
    /// Register a new user
    ///
    /// Duplicate usernames are caught by the database unique index, not by
    /// a prior existence check; the unique violation maps to 409.
    pub async fn register(
        pool: &PgPool,
        passwords: &PasswordService,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<MessageResponse, ApiError> {
        let (username, password) = match (non_empty(username), non_empty(password)) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                return Err(ApiError::BadRequest(
                    "Username and password are required".to_string(),
                ))
            }
        };

        // Hash on the blocking pool (CPU-intensive)
        let password_hash = passwords
            .hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        UserRepository::create(pool, &username, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Username already exists".to_string())
                } else {
                    ApiError::Database(e)
                }
            })?;

        // No token and no user data in the response; registering is not
        // logging in.
        Ok(MessageResponse::new("User registered successfully"))
    }

    /// Login with username and password
    ///
    /// An unknown username and a wrong password produce byte-identical
    /// responses so that usernames cannot be probed.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        passwords: &PasswordService,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<LoginResponse, ApiError> {
        let (username, password) = match (non_empty(username), non_empty(password)) {
            (Some(u), Some(p)) => (u, p),
            _ => {
                return Err(ApiError::BadRequest(
                    "Username and password are required".to_string(),
                ))
            }
        };

        let user = UserRepository::find_by_username(pool, &username)
            .await
            .map_err(ApiError::Database)?
            .ok_or_else(invalid_credentials)?;

        // Verify on the blocking pool (CPU-intensive)
        let valid = passwords
            .verify_async(password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(invalid_credentials());
        }

        let token = jwt
            .issue(user.id, &user.username)
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }

    /// Overwrite the caller's username
    ///
    /// Outstanding tokens keep the old username claim until they expire;
    /// no re-issue happens here.
    pub async fn update_username(
        pool: &PgPool,
        identity: &AuthUser,
        username: Option<String>,
    ) -> Result<MessageResponse, ApiError> {
        let username = non_empty(username)
            .ok_or_else(|| ApiError::BadRequest("Username is required".to_string()))?;

        UserRepository::update_username(pool, identity.user_id, &username)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Username already exists".to_string())
                } else {
                    ApiError::Database(e)
                }
            })?;

        Ok(MessageResponse::new("Username updated successfully"))
    }

    /// Overwrite the caller's password
    pub async fn update_password(
        pool: &PgPool,
        passwords: &PasswordService,
        identity: &AuthUser,
        password: Option<String>,
    ) -> Result<MessageResponse, ApiError> {
        let password = non_empty(password)
            .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

        let password_hash = passwords
            .hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        UserRepository::update_password(pool, identity.user_id, &password_hash)
            .await
            .map_err(ApiError::Database)?;

        Ok(MessageResponse::new("Password updated successfully"))
    }
}

/// Presence check: absent, empty and whitespace-only all count as missing
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid username or password".to_string())
}
