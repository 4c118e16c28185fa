//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod catalog_port;
mod credential_port;
mod geocoding_port;
mod road_routing_port;
mod sea_routing_port;

#[cfg(test)]
pub use catalog_port::MockCatalogPort;
pub use catalog_port::{CatalogPort, CatalogSource};
#[cfg(test)]
pub use credential_port::MockCredentialVerifier;
pub use credential_port::CredentialVerifier;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use road_routing_port::MockRoadRoutingPort;
pub use road_routing_port::RoadRoutingPort;
#[cfg(test)]
pub use sea_routing_port::MockSeaRoutingPort;
pub use sea_routing_port::SeaRoutingPort;
