//! Password hashing using bcrypt
//!
//! Provides salted one-way hashing with a configurable work factor and
//! constant-time verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. The async variants run the work
//! on the blocking thread pool so it never stalls the request dispatcher.

use anyhow::Result;

/// Password hashing service
///
/// Each hash uses a fresh random salt; the cost factor is fixed at
/// construction (10 by default, from configuration).
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl Default for PasswordService {
    fn default() -> Self {
        Self { cost: 10 }
    }
}

impl PasswordService {
    /// Create a service with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Verify a password against a digest (blocking operation)
    ///
    /// The comparison inside bcrypt is constant-time. A malformed digest is
    /// a verification failure, not an error: this can only mean the stored
    /// record is unusable, and the caller treats it like a wrong password.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        bcrypt::verify(password, digest).unwrap_or(false)
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(&self, password: String, digest: String) -> Result<bool> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.verify(&password, &digest))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))
    }
}
