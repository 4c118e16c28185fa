//! Road vehicle classes and their transport emission factors

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Average container ship emissions in kg CO2 per tonne-km
pub const MARITIME_CO2_KG_PER_TONNE_KM: f64 = 0.015;

/// Road vehicle used for the car legs of a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Heavy goods vehicle over 32 t gross weight
    #[default]
    #[serde(rename = "truck-over-32")]
    TruckOver32,
    /// Heavy goods vehicle, 16 to 32 t
    #[serde(rename = "truck-16-to-32")]
    Truck16To32,
    /// Medium goods vehicle, 7.5 to 16 t
    #[serde(rename = "truck-7-to-16")]
    Truck7To16,
    /// Light commercial vehicle up to 3.5 t
    #[serde(rename = "van")]
    Van,
}

impl VehicleClass {
    /// All vehicle classes, heaviest first
    pub const ALL: [Self; 4] = [
        Self::TruckOver32,
        Self::Truck16To32,
        Self::Truck7To16,
        Self::Van,
    ];

    /// Emission factor in kg CO2 per km
    #[must_use]
    pub const fn co2_kg_per_km(&self) -> f64 {
        match self {
            Self::TruckOver32 => 0.679,
            Self::Truck16To32 => 0.486,
            Self::Truck7To16 => 0.368,
            Self::Van => 0.298,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TruckOver32 => "Truck (>32t)",
            Self::Truck16To32 => "Truck (16-32t)",
            Self::Truck7To16 => "Truck (7.5-16t)",
            Self::Van => "Van (<3.5t)",
        }
    }

    /// Longer description for help output
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::TruckOver32 => "Heavy goods vehicle, gross weight over 32 tonnes",
            Self::Truck16To32 => "Heavy goods vehicle, gross weight 16-32 tonnes",
            Self::Truck7To16 => "Medium goods vehicle, gross weight 7.5-16 tonnes",
            Self::Van => "Light commercial vehicle, gross weight up to 3.5 tonnes",
        }
    }

    /// Stable identifier accepted by [`FromStr`]
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::TruckOver32 => "truck-over-32",
            Self::Truck16To32 => "truck-16-to-32",
            Self::Truck7To16 => "truck-7-to-16",
            Self::Van => "van",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VehicleClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| {
                class.slug().eq_ignore_ascii_case(wanted)
                    || class.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DomainError::not_found("Vehicle class", wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_match_reference_table() {
        assert!((VehicleClass::TruckOver32.co2_kg_per_km() - 0.679).abs() < f64::EPSILON);
        assert!((VehicleClass::Truck16To32.co2_kg_per_km() - 0.486).abs() < f64::EPSILON);
        assert!((VehicleClass::Truck7To16.co2_kg_per_km() - 0.368).abs() < f64::EPSILON);
        assert!((VehicleClass::Van.co2_kg_per_km() - 0.298).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_slug_and_label() {
        assert_eq!("van".parse::<VehicleClass>().unwrap(), VehicleClass::Van);
        assert_eq!(
            "Truck (16-32t)".parse::<VehicleClass>().unwrap(),
            VehicleClass::Truck16To32
        );
        assert_eq!(
            " TRUCK-OVER-32 ".parse::<VehicleClass>().unwrap(),
            VehicleClass::TruckOver32
        );
    }

    #[test]
    fn rejects_unknown_vehicle() {
        let err = "bicycle".parse::<VehicleClass>().unwrap_err();
        assert!(err.to_string().contains("bicycle"));
    }

    #[test]
    fn default_is_heaviest_truck() {
        assert_eq!(VehicleClass::default(), VehicleClass::TruckOver32);
    }

    #[test]
    fn serde_matches_slug() {
        for class in VehicleClass::ALL {
            let json = serde_json::to_string(&class).unwrap();
            assert_eq!(json, format!("\"{}\"", class.slug()));
        }
    }
}
