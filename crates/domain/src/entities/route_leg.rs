//! Route legs - resolved segments of a multi-modal journey

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// Transport mode of a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegMode {
    /// Driving route from the road router
    Road,
    /// Straight great-circle line across water
    Sea,
}

impl fmt::Display for LegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Road => write!(f, "road"),
            Self::Sea => write!(f, "sea"),
        }
    }
}

/// A resolved leg: polyline in latitude-first order plus its length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    mode: LegMode,
    polyline: Vec<GeoLocation>,
    distance_km: f64,
}

impl RouteLeg {
    /// A leg of any mode with a known length; negative distances become zero
    #[must_use]
    pub fn new(mode: LegMode, polyline: Vec<GeoLocation>, distance_km: f64) -> Self {
        Self {
            mode,
            polyline,
            distance_km: distance_km.max(0.0),
        }
    }

    /// A road leg as returned by a routing service
    ///
    /// Negative distances are clamped to zero.
    #[must_use]
    pub fn road(polyline: Vec<GeoLocation>, distance_km: f64) -> Self {
        Self::new(LegMode::Road, polyline, distance_km)
    }

    /// A sea leg between two ports: the straight line and its great-circle length
    #[must_use]
    pub fn sea(from: GeoLocation, to: GeoLocation) -> Self {
        Self {
            mode: LegMode::Sea,
            distance_km: from.distance_km(&to),
            polyline: vec![from, to],
        }
    }

    #[must_use]
    pub const fn mode(&self) -> LegMode {
        self.mode
    }

    #[must_use]
    pub fn polyline(&self) -> &[GeoLocation] {
        &self.polyline
    }

    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }
}
