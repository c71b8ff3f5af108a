//! Storefront Shared Library
//!
//! This crate contains the types and models shared between the backend
//! and API clients.

pub mod models;
pub mod types;

// Re-export commonly used items
pub use models::{Order, OrderItem};
pub use types::*;
