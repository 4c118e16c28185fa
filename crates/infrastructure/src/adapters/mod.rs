//! Adapters implementing application ports
//!
//! Each adapter wraps an external client or resource and translates its
//! errors into [`ApplicationError`](application::error::ApplicationError).

mod credential_store;
mod geocoding_adapter;
mod password_hasher;
mod road_routing_adapter;
mod sea_routing_adapter;
mod xlsx_catalog_adapter;

pub use credential_store::ConfigCredentialVerifier;
pub use geocoding_adapter::GeocodingAdapter;
pub use password_hasher::{CredentialHashError, PasswordHasher};
pub use road_routing_adapter::RoadRoutingAdapter;
pub use sea_routing_adapter::GreatCircleSeaRouter;
pub use xlsx_catalog_adapter::{CatalogLoadError, XlsxCatalogAdapter, catalog_from_sheets};
