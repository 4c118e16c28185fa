//! Transport emission service
//!
//! Estimates the distance and CO2 of moving cargo by road, optionally with a
//! sea crossing between two ports. Geocoding failures of any mandatory
//! endpoint abort the request before a single leg is routed; a leg that
//! cannot be routed afterwards is dropped and the remaining legs are
//! still reported.

use std::{fmt, sync::Arc};

use domain::{
    DomainError, EmissionFactors, LegKind, RouteLeg, TransportEstimate, Waypoints,
    value_objects::{Facility, GeoLocation, MARITIME_CO2_KG_PER_TONNE_KM, VehicleClass},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, RoadRoutingPort, SeaRoutingPort},
};

/// Lightest cargo accepted, in tonnes
pub const MIN_CARGO_TONNES: f64 = 0.1;
/// Heaviest cargo accepted, in tonnes
pub const MAX_CARGO_TONNES: f64 = 100.0;

/// Where the journey starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A known production facility, geocoded by its street address
    Facility(Facility),
    /// Any free-text place name
    Place(String),
}

impl Origin {
    /// Text sent to the geocoder
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Facility(facility) => facility.address(),
            Self::Place(place) => place,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facility(facility) => write!(f, "{}", facility.name()),
            Self::Place(place) => write!(f, "{place}"),
        }
    }
}

/// Port pair of an optional sea crossing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaLegRequest {
    pub departure_port: String,
    pub arrival_port: String,
}

/// Everything needed for one estimate
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub origin: Origin,
    pub destination: String,
    pub vehicle: VehicleClass,
    pub cargo_tonnes: f64,
    pub sea_leg: Option<SeaLegRequest>,
}

impl TransportRequest {
    /// Direct road transport request
    #[must_use]
    pub fn new(
        origin: Origin,
        destination: impl Into<String>,
        vehicle: VehicleClass,
        cargo_tonnes: f64,
    ) -> Self {
        Self {
            origin,
            destination: destination.into(),
            vehicle,
            cargo_tonnes,
            sea_leg: None,
        }
    }

    /// Route the cargo via a sea crossing between two ports
    #[must_use]
    pub fn with_sea_leg(
        mut self,
        departure_port: impl Into<String>,
        arrival_port: impl Into<String>,
    ) -> Self {
        self.sea_leg = Some(SeaLegRequest {
            departure_port: departure_port.into(),
            arrival_port: arrival_port.into(),
        });
        self
    }

    /// Check the request before any network call is made
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank place names or a cargo weight
    /// outside 0.1..=100 tonnes.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origin.query().trim().is_empty() {
            return Err(DomainError::validation("start location must not be empty"));
        }
        if self.destination.trim().is_empty() {
            return Err(DomainError::validation("destination must not be empty"));
        }
        if let Some(sea) = &self.sea_leg {
            if sea.departure_port.trim().is_empty() || sea.arrival_port.trim().is_empty() {
                return Err(DomainError::validation(
                    "both ports must be given for a sea leg",
                ));
            }
        }
        if !(MIN_CARGO_TONNES..=MAX_CARGO_TONNES).contains(&self.cargo_tonnes) {
            return Err(DomainError::validation(format!(
                "cargo weight must be between {MIN_CARGO_TONNES} and {MAX_CARGO_TONNES} tonnes, got {}",
                self.cargo_tonnes
            )));
        }
        Ok(())
    }
}

/// Multi-leg transport estimator
pub struct TransportEmissionService {
    geocoder: Arc<dyn GeocodingPort>,
    road: Arc<dyn RoadRoutingPort>,
    sea: Arc<dyn SeaRoutingPort>,
}

impl fmt::Debug for TransportEmissionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportEmissionService")
            .finish_non_exhaustive()
    }
}

impl TransportEmissionService {
    /// Create a new transport emission service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        road: Arc<dyn RoadRoutingPort>,
        sea: Arc<dyn SeaRoutingPort>,
    ) -> Self {
        Self { geocoder, road, sea }
    }

    /// Estimate distance and CO2 of a journey
    ///
    /// Legs are resolved one after another in traversal order.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid request and
    /// `LocationResolution` when the start, the destination or either port
    /// cannot be geocoded. Leg routing failures are not errors.
    #[instrument(skip(self, request), fields(origin = %request.origin, destination = %request.destination))]
    pub async fn estimate(
        &self,
        request: &TransportRequest,
    ) -> Result<TransportEstimate, ApplicationError> {
        request.validate()?;
        let factors = EmissionFactors::with_maritime(
            request.vehicle.co2_kg_per_km(),
            MARITIME_CO2_KG_PER_TONNE_KM,
            request.cargo_tonnes,
        )?;

        let start = self.resolve(request.origin.query()).await?;
        let destination = self.resolve(&request.destination).await?;

        let estimate = match &request.sea_leg {
            None => {
                let mut estimate =
                    TransportEstimate::new(Waypoints::direct(start, destination), factors);
                self.push_road_leg(&mut estimate, LegKind::Direct, &start, &destination)
                    .await;
                estimate
            },
            Some(sea) => {
                let departure = self.resolve(&sea.departure_port).await?;
                let arrival = self.resolve(&sea.arrival_port).await?;

                let waypoints = Waypoints::via_ports(start, departure, arrival, destination);
                let mut estimate = TransportEstimate::new(waypoints, factors);
                self.push_road_leg(&mut estimate, LegKind::ToPort, &start, &departure)
                    .await;
                let boat = self.sea.sea_route(&departure, &arrival);
                push_leg(&mut estimate, LegKind::Boat, boat);
                self.push_road_leg(&mut estimate, LegKind::FromPort, &arrival, &destination)
                    .await;
                estimate
            },
        };

        info!(
            legs = estimate.legs().len(),
            total_distance_km = estimate.total_distance_km(),
            total_co2_kg = estimate.total_co2_kg(),
            "Transport estimate complete"
        );
        Ok(estimate)
    }

    async fn resolve(&self, place: &str) -> Result<GeoLocation, ApplicationError> {
        let place = place.trim();
        let location = self.geocoder.geocode(place).await.map_err(|e| {
            warn!(%place, error = %e, "Location could not be resolved");
            ApplicationError::LocationResolution {
                place: place.to_string(),
                source: Box::new(e),
            }
        })?;
        debug!(%place, %location, "Resolved location");
        Ok(location)
    }

    async fn push_road_leg(
        &self,
        estimate: &mut TransportEstimate,
        kind: LegKind,
        from: &GeoLocation,
        to: &GeoLocation,
    ) {
        let leg = self.road.road_route(from, to).await;
        push_leg(estimate, kind, leg);
    }
}

fn push_leg(
    estimate: &mut TransportEstimate,
    kind: LegKind,
    leg: Result<RouteLeg, ApplicationError>,
) {
    match leg {
        Ok(leg) => {
            let added = estimate.push_leg(kind, leg);
            debug!(
                leg = kind.label(),
                distance_km = added.distance_km(),
                co2_kg = added.co2_kg(),
                "Leg resolved"
            );
        },
        Err(e) => warn!(leg = kind.label(), error = %e, "Leg dropped from estimate"),
    }
}
