//! Database repositories
//!
//! Provides the data access layer. Repositories return raw `sqlx::Error`
//! so the service layer can distinguish constraint violations from other
//! failures.

pub mod order;
pub mod user;

pub use order::{NewOrder, OrderRecord, OrderRepository};
pub use user::{UserRecord, UserRepository};
