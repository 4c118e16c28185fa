//! Road routing port

use async_trait::async_trait;
use domain::{RouteLeg, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for driving routes between two coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoadRoutingPort: Send + Sync {
    /// Road leg with a latitude-first polyline and its length in km
    async fn road_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<RouteLeg, ApplicationError>;
}
