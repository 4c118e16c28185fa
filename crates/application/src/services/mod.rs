//! Application services - Use case implementations

mod auth_service;
mod catalog_service;
mod project_calculator;
mod transport_service;

pub use auth_service::{AuthService, Session};
pub use catalog_service::{CatalogService, Comparison};
pub use project_calculator::ProjectCalculator;
pub use transport_service::{
    MAX_CARGO_TONNES, MIN_CARGO_TONNES, Origin, SeaLegRequest, TransportEmissionService,
    TransportRequest,
};
