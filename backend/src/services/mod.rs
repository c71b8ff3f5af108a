//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth subsystem.

pub mod account;
pub mod order;

pub use account::AccountService;
pub use order::OrderService;
