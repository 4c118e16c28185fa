//! OSRM road routing client

use std::time::Duration;

use async_trait::async_trait;
use domain::{RouteLeg, value_objects::GeoLocation};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::OsrmConfig,
    error::RoutingError,
    wire::{OsrmResponse, osrm_coordinate},
};

/// Trait for road routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Driving route between two points as a road leg
    async fn route(&self, from: &GeoLocation, to: &GeoLocation) -> Result<RouteLeg, RoutingError>;
}

/// Client for the OSRM `route` service
#[derive(Debug)]
pub struct OsrmRoutingClient {
    client: Client,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RoutingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn route_url(&self, from: &GeoLocation, to: &GeoLocation) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.config.base_url,
            self.config.profile,
            osrm_coordinate(from),
            osrm_coordinate(to)
        )
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip(self), fields(from = %from, to = %to))]
    async fn route(&self, from: &GeoLocation, to: &GeoLocation) -> Result<RouteLeg, RoutingError> {
        let url = self.route_url(from, to);
        debug!(%url, "Requesting road route");

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RoutingError::Timeout
                } else {
                    RoutingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RoutingError::RequestFailed(format!(
                "Status code: {}",
                response.status().as_u16()
            )));
        }

        let body: OsrmResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let route = body.routes.first().ok_or_else(|| RoutingError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        debug!(
            code = %body.code,
            distance_km = route.distance_km(),
            points = route.geometry.coordinates.len(),
            "Road route resolved"
        );
        Ok(RouteLeg::road(route.polyline(), route.distance_km()))
    }
}
