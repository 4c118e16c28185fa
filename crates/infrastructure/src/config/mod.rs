//! Application configuration
//!
//! Split into focused sub-modules:
//! - `catalogs`: EPD workbook locations
//! - `security`: login users and their password hashes
//!
//! Geocoding and routing settings come from `integration_geo`, logging
//! settings from [`crate::telemetry`].

mod catalogs;
mod security;

use std::path::Path;

use integration_geo::{NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::telemetry::LoggingConfig;

pub use catalogs::CatalogConfig;
pub use security::{AuthConfig, UserEntry};

/// Prefix of environment overrides, e.g. `EPD_GEOCODING__BASE_URL`
pub const ENV_PREFIX: &str = "EPD";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoder settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// OSRM road router settings
    #[serde(default)]
    pub routing: OsrmConfig,

    /// EPD workbook locations
    #[serde(default)]
    pub catalogs: CatalogConfig,

    /// Login users
    #[serde(default)]
    pub auth: AuthConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, then the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .set_default("geocoding.user_agent", "EPD_Maps_App/1.0")?
            .set_default("logging.level", "info")?
            .add_source(file)
            // Override with environment variables (e.g., EPD_ROUTING__PROFILE)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        debug!(
            nominatim = %self.geocoding.base_url,
            osrm = %self.routing.base_url,
            users = self.auth.users.len(),
            "Configuration loaded"
        );
        if self.auth.users.is_empty() {
            warn!("No login users configured; every login will be rejected");
        }
    }
}
