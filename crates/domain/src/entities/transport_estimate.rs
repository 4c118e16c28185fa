//! Transport estimate - itemized distance and CO2 of a multi-leg journey

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    entities::route_leg::{LegMode, RouteLeg},
    errors::DomainError,
    value_objects::{GeoLocation, MARITIME_CO2_KG_PER_TONNE_KM},
};

/// Position of a leg within the journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    /// Single road leg from start to destination
    Direct,
    /// Road leg from start to the departure port
    ToPort,
    /// Sea leg between the two ports
    Boat,
    /// Road leg from the arrival port to the destination
    FromPort,
}

impl LegKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Direct => "Direct car route",
            Self::ToPort => "Car to port",
            Self::Boat => "Boat leg",
            Self::FromPort => "Car from port",
        }
    }
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Emission factors applied to every leg of one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    road_kg_per_km: f64,
    maritime_kg_per_tonne_km: f64,
    cargo_tonnes: f64,
}

impl EmissionFactors {
    /// Factors for a road vehicle and cargo weight, with the default maritime factor
    ///
    /// # Errors
    ///
    /// Returns a validation error when a factor or the cargo weight is negative
    /// or not finite.
    pub fn new(road_kg_per_km: f64, cargo_tonnes: f64) -> Result<Self, DomainError> {
        Self::with_maritime(road_kg_per_km, MARITIME_CO2_KG_PER_TONNE_KM, cargo_tonnes)
    }

    /// Factors with an explicit maritime factor
    pub fn with_maritime(
        road_kg_per_km: f64,
        maritime_kg_per_tonne_km: f64,
        cargo_tonnes: f64,
    ) -> Result<Self, DomainError> {
        for (name, value) in [
            ("road emission factor", road_kg_per_km),
            ("maritime emission factor", maritime_kg_per_tonne_km),
            ("cargo weight", cargo_tonnes),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::validation(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self {
            road_kg_per_km,
            maritime_kg_per_tonne_km,
            cargo_tonnes,
        })
    }

    #[must_use]
    pub const fn road_kg_per_km(&self) -> f64 {
        self.road_kg_per_km
    }

    #[must_use]
    pub const fn maritime_kg_per_tonne_km(&self) -> f64 {
        self.maritime_kg_per_tonne_km
    }

    #[must_use]
    pub const fn cargo_tonnes(&self) -> f64 {
        self.cargo_tonnes
    }

    /// CO2 in kg for a leg: distance x mode factor x cargo weight
    #[must_use]
    pub fn co2_kg(&self, leg: &RouteLeg) -> f64 {
        let factor = match leg.mode() {
            LegMode::Road => self.road_kg_per_km,
            LegMode::Sea => self.maritime_kg_per_tonne_km,
        };
        leg.distance_km() * factor * self.cargo_tonnes
    }
}

/// A leg together with its computed emissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegEstimate {
    kind: LegKind,
    leg: RouteLeg,
    co2_kg: f64,
}

impl LegEstimate {
    #[must_use]
    pub const fn kind(&self) -> LegKind {
        self.kind
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }

    #[must_use]
    pub const fn mode(&self) -> LegMode {
        self.leg.mode()
    }

    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.leg.distance_km()
    }

    #[must_use]
    pub const fn co2_kg(&self) -> f64 {
        self.co2_kg
    }

    /// Leg geometry, latitude first
    #[must_use]
    pub fn polyline(&self) -> &[GeoLocation] {
        self.leg.polyline()
    }
}

/// Resolved endpoints of a journey
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoints {
    pub start: GeoLocation,
    pub destination: GeoLocation,
    /// Departure and arrival port when the journey has a sea leg
    pub ports: Option<(GeoLocation, GeoLocation)>,
}

impl Waypoints {
    #[must_use]
    pub const fn direct(start: GeoLocation, destination: GeoLocation) -> Self {
        Self {
            start,
            destination,
            ports: None,
        }
    }

    #[must_use]
    pub const fn via_ports(
        start: GeoLocation,
        departure_port: GeoLocation,
        arrival_port: GeoLocation,
        destination: GeoLocation,
    ) -> Self {
        Self {
            start,
            destination,
            ports: Some((departure_port, arrival_port)),
        }
    }

    /// Map centre between start and destination
    #[must_use]
    pub fn map_center(&self) -> GeoLocation {
        self.start.midpoint(&self.destination)
    }
}

/// Itemized estimate; totals always equal the sums over `legs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportEstimate {
    waypoints: Waypoints,
    factors: EmissionFactors,
    legs: Vec<LegEstimate>,
    total_distance_km: f64,
    total_co2_kg: f64,
}

impl TransportEstimate {
    /// Start an empty estimate
    #[must_use]
    pub const fn new(waypoints: Waypoints, factors: EmissionFactors) -> Self {
        Self {
            waypoints,
            factors,
            legs: Vec::new(),
            total_distance_km: 0.0,
            total_co2_kg: 0.0,
        }
    }

    /// Append a resolved leg in traversal order and update the totals
    pub fn push_leg(&mut self, kind: LegKind, leg: RouteLeg) -> &LegEstimate {
        let co2_kg = self.factors.co2_kg(&leg);
        self.total_distance_km += leg.distance_km();
        self.total_co2_kg += co2_kg;
        self.legs.push(LegEstimate { kind, leg, co2_kg });
        &self.legs[self.legs.len() - 1]
    }

    #[must_use]
    pub fn legs(&self) -> &[LegEstimate] {
        &self.legs
    }

    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    #[must_use]
    pub const fn total_co2_kg(&self) -> f64 {
        self.total_co2_kg
    }

    #[must_use]
    pub const fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    #[must_use]
    pub const fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// True when no leg could be resolved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// (label, distance km, CO2 kg) per leg, in traversal order
    #[must_use]
    pub fn breakdown(&self) -> Vec<(&'static str, f64, f64)> {
        self.legs
            .iter()
            .map(|l| (l.label(), l.distance_km(), l.co2_kg()))
            .collect()
    }

    /// Multi-line text summary with totals followed by one line per leg
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut out = format!(
            "Total route distance: {:.2} km\nTotal CO2: {:.1} kg CO2eq",
            self.total_distance_km, self.total_co2_kg
        );
        for (label, distance, co2) in self.breakdown() {
            out.push_str(&format!("\n- {label}: {distance:.2} km, {co2:.1} kg CO2eq"));
        }
        out
    }
}

impl fmt::Display for TransportEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}
