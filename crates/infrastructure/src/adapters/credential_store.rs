//! Credential store - Implements CredentialVerifier over configured users

use std::collections::HashMap;

use application::ports::CredentialVerifier;
use tracing::{debug, warn};

use super::PasswordHasher;
use crate::config::AuthConfig;

/// Verifies logins against the argon2 hashes from [`AuthConfig`]
pub struct ConfigCredentialVerifier {
    users: HashMap<String, String>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for ConfigCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigCredentialVerifier")
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl ConfigCredentialVerifier {
    /// Build the store; entries without an argon2 hash are ignored
    pub fn new(config: &AuthConfig) -> Self {
        let users = config
            .users
            .iter()
            .filter(|user| {
                let hashed = PasswordHasher::is_hashed(&user.password_hash);
                if !hashed {
                    warn!(
                        username = %user.username,
                        "Ignoring user without an argon2 password hash"
                    );
                }
                hashed
            })
            .map(|user| (user.username.clone(), user.password_hash.clone()))
            .collect();

        Self {
            users,
            hasher: PasswordHasher::new(),
        }
    }
}

impl CredentialVerifier for ConfigCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        let Some(hash) = self.users.get(username) else {
            debug!("Credentials rejected");
            return false;
        };

        match self.hasher.verify(password, hash) {
            Ok(valid) => {
                if !valid {
                    debug!("Credentials rejected");
                }
                valid
            },
            Err(e) => {
                warn!(%username, error = %e, "Stored password hash is unusable");
                false
            },
        }
    }
}
