//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the Nominatim and OSRM adapters, the XLSX catalog loader,
//! the argon2 credential store, configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, AuthConfig, CatalogConfig, UserEntry};
pub use telemetry::{LogFormat, LoggingConfig, LoggingError, init_logging};
