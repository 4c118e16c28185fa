//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A place name produced no geocoding result
    #[error("No results found for location: {0}")]
    LocationNotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// A mandatory journey endpoint could not be geocoded
    #[error("Could not resolve location '{place}': {source}")]
    LocationResolution {
        place: String,
        #[source]
        source: Box<ApplicationError>,
    },

    /// Reference data could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// User not authorized
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited | Self::ExternalService(_) => true,
            Self::LocationResolution { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}
