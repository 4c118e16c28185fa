//! Security configuration: login users.

use serde::{Deserialize, Serialize};

/// A login user with an argon2 password hash
///
/// Passwords must be pre-hashed in PHC format.
/// Use `epd-cli hash-password` to generate the hash.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserEntry {
    /// Login name, compared exactly
    pub username: String,

    /// Argon2id hash of the password in PHC format
    /// Example: "$argon2id$v=19$m=19456,t=2,p=1$..."
    pub password_hash: String,
}

impl std::fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEntry")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Authentication configuration
///
/// Example in config.toml:
/// ```toml
/// [[auth.users]]
/// username = "admin"
/// password_hash = "$argon2id$v=19$m=19456,t=2,p=1$..."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

impl AuthConfig {
    /// Stored hash for `username`, if the user exists
    pub fn hash_for(&self, username: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.password_hash.as_str())
    }
}
