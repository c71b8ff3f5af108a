//! API request and response types
//!
//! Request bodies use `Option` fields so that an absent key reaches the
//! service-level presence check and is answered with 400, rather than being
//! rejected by the deserializer.

use serde::{Deserialize, Serialize};

use crate::models::OrderItem;

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Username change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsernameRequest {
    pub username: Option<String>,
}

/// Password change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: Option<String>,
}

/// Order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Option<Vec<OrderItem>>,
}

/// Generic acknowledgment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login response carrying the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
