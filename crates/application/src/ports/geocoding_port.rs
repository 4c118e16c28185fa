//! Geocoding port
//!
//! Turns a free-text place name into a coordinate. Adapters report a place
//! without matches as `LocationNotFound` and an access-denied answer as
//! `RateLimited`; every other failure is `ExternalService`.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place name resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Coordinate of the first match for `place`
    async fn geocode(&self, place: &str) -> Result<GeoLocation, ApplicationError>;
}
