//! Credential verification port

#[cfg(test)]
use mockall::automock;

/// Checks a username and password pair
///
/// Implementations must answer unknown users and wrong passwords the same way.
#[cfg_attr(test, automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
