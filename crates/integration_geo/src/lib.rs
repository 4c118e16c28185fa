//! Geographic service integration for the EPD dashboards
//!
//! Provides address geocoding via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and road routing via the [OSRM](http://project-osrm.org) HTTP API.
//!
//! # Architecture
//!
//! [`GeocodingClient`] turns free-form place names into coordinates and is
//! implemented by [`NominatimGeocodingClient`]. [`RoutingClient`] returns the
//! driving route between two coordinates and is implemented by
//! [`OsrmRoutingClient`]. OSRM speaks longitude-first coordinates; the
//! conversion to latitude-first [`GeoLocation`](domain::GeoLocation) happens in
//! one place, the private `wire` module.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geo::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let gothenburg = client.geocode("Gothenburg, Sweden").await?;
//! ```

mod config;
mod error;
mod geocoding;
mod routing;
mod wire;

pub use config::{NominatimConfig, OsrmConfig};
pub use error::{GeocodingError, RoutingError};
pub use geocoding::{GeocodingClient, NominatimGeocodingClient};
pub use routing::{OsrmRoutingClient, RoutingClient};
