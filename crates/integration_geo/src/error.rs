//! Geocoding and routing error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Geocoding service answered with an unexpected status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Query could not be resolved to coordinates
    #[error("No results found for location: {0}")]
    AddressNotFound(String),

    /// Access denied by the service (HTTP 403), usually throttling
    #[error("Access denied by geocoding service, try again in a few moments")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Errors that can occur during road routing
#[derive(Debug, Error)]
pub enum RoutingError {
    /// Connection to the routing service failed
    #[error("Routing connection failed: {0}")]
    ConnectionFailed(String),

    /// Routing service answered with an unexpected status
    #[error("Error fetching route: {0}")]
    RequestFailed(String),

    /// Failed to parse routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),

    /// The service found no route between the coordinates
    #[error("No route found between {from} and {to}")]
    NoRoute {
        /// Origin, latitude first
        from: String,
        /// Destination, latitude first
        to: String,
    },

    /// Request timeout
    #[error("Routing request timed out")]
    Timeout,
}

impl RoutingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::Timeout
        )
    }
}

impl GeocodingError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RateLimitExceeded | Self::Timeout
        )
    }
}
