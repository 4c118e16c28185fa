//! Raw service payloads and coordinate-order conversion
//!
//! Nominatim returns latitude and longitude as separate strings; OSRM takes
//! and returns `[longitude, latitude]` pairs. Everything leaving this module
//! is a latitude-first [`GeoLocation`].

use domain::value_objects::GeoLocation;
use serde::Deserialize;

/// One Nominatim search hit
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimResult {
    pub fn location(&self) -> Result<GeoLocation, String> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| format!("Invalid latitude '{}'", self.lat))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|_| format!("Invalid longitude '{}'", self.lon))?;
        GeoLocation::new(lat, lon).map_err(|e| e.to_string())
    }
}

/// OSRM `route` service response
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    /// Metres
    pub distance: f64,
    pub geometry: OsrmGeometry,
}

/// GeoJSON line string
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmRoute {
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    pub fn polyline(&self) -> Vec<GeoLocation> {
        self.geometry
            .coordinates
            .iter()
            .copied()
            .map(from_osrm)
            .collect()
    }
}

/// Latitude-first location to an OSRM `[longitude, latitude]` pair
pub(crate) fn to_osrm(location: &GeoLocation) -> [f64; 2] {
    [location.longitude(), location.latitude()]
}

/// OSRM `[longitude, latitude]` pair to a latitude-first location
pub(crate) fn from_osrm([lon, lat]: [f64; 2]) -> GeoLocation {
    GeoLocation::new_unchecked(lat, lon)
}

/// `lon,lat` path segment for an OSRM request
pub(crate) fn osrm_coordinate(location: &GeoLocation) -> String {
    let [lon, lat] = to_osrm(location);
    format!("{lon},{lat}")
}
