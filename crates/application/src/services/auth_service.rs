//! Login handling
//!
//! Sessions live only in process memory; logging out drops the value.

use std::{fmt, sync::Arc};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{error::ApplicationError, ports::CredentialVerifier};

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    username: String,
}

impl Session {
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Verifies credentials and opens sessions
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a new auth service
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// Open a session for valid credentials
    ///
    /// # Errors
    ///
    /// Returns `NotAuthorized` for a blank username, an unknown user or a
    /// wrong password, with the same message for all three.
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<Session, ApplicationError> {
        let username = username.trim();
        if username.is_empty() || !self.verifier.verify(username, password) {
            warn!("Login rejected");
            return Err(ApplicationError::NotAuthorized(
                "Invalid username or password".to_string(),
            ));
        }
        info!("Login succeeded");
        Ok(Session {
            username: username.to_string(),
        })
    }
}
