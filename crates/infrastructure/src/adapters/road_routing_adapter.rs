//! Road routing adapter - Implements RoadRoutingPort using integration_geo

use application::{error::ApplicationError, ports::RoadRoutingPort};
use async_trait::async_trait;
use domain::{RouteLeg, value_objects::GeoLocation};
use integration_geo::{OsrmConfig, OsrmRoutingClient, RoutingClient, RoutingError};
use tracing::{debug, instrument, warn};

/// Adapter for driving routes through a [`RoutingClient`]
pub struct RoadRoutingAdapter<C = OsrmRoutingClient> {
    client: C,
}

impl<C> std::fmt::Debug for RoadRoutingAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadRoutingAdapter")
            .field("client", &std::any::type_name::<C>())
            .finish()
    }
}

impl RoadRoutingAdapter {
    /// Create an adapter over the OSRM client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn osrm(config: &OsrmConfig) -> Result<Self, ApplicationError> {
        let client = OsrmRoutingClient::new(config).map_err(map_routing_error)?;
        Ok(Self::new(client))
    }
}

impl<C: RoutingClient> RoadRoutingAdapter<C> {
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

fn map_routing_error(err: RoutingError) -> ApplicationError {
    ApplicationError::ExternalService(err.to_string())
}

#[async_trait]
impl<C: RoutingClient> RoadRoutingPort for RoadRoutingAdapter<C> {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn road_route(
        &self,
        from: &GeoLocation,
        to: &GeoLocation,
    ) -> Result<RouteLeg, ApplicationError> {
        match self.client.route(from, to).await {
            Ok(leg) => {
                debug!(distance_km = leg.distance_km(), "Road leg resolved");
                Ok(leg)
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Road routing failed");
                Err(map_routing_error(e))
            },
        }
    }
}
