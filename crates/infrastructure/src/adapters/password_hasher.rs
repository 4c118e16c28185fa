//! Password hashing with Argon2id
//!
//! Login passwords are stored as PHC strings in configuration and verified
//! in constant time by the argon2 crate.
//!
//! # Examples
//!
//! ```
//! use infrastructure::adapters::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("admin123").unwrap();
//!
//! assert!(hasher.verify("admin123", &hash).unwrap());
//! assert!(!hasher.verify("admin124", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHash, PasswordHasher as ArgonPasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors that can occur during password hashing
#[derive(Debug, Error)]
pub enum CredentialHashError {
    /// Failed to hash the password
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    /// The stored hash is not a PHC string
    #[error("Invalid hash format: {0}")]
    InvalidHashFormat(String),
}

/// Argon2id password hasher with the crate's default parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Hash a password into a PHC string with a fresh random salt
    #[instrument(skip(self, password))]
    pub fn hash(&self, password: &str) -> Result<String, CredentialHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialHashError::HashingFailed(e.to_string()))?;

        debug!("Password hashed");
        Ok(hash.to_string())
    }

    /// Check a password against a stored PHC hash
    ///
    /// # Errors
    ///
    /// Returns `InvalidHashFormat` when `hash` cannot be parsed; a wrong
    /// password is `Ok(false)`.
    #[instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialHashError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| CredentialHashError::InvalidHashFormat(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Whether a configured value looks like an argon2 PHC string
    #[must_use]
    pub fn is_hashed(value: &str) -> bool {
        value.starts_with("$argon2")
    }
}
