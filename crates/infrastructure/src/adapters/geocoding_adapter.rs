//! Geocoding adapter - Implements GeocodingPort using integration_geo

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geo::{GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient};
use tracing::{instrument, warn};

/// Adapter for place name resolution through a [`GeocodingClient`]
pub struct GeocodingAdapter<C = NominatimGeocodingClient> {
    client: C,
}

impl<C> std::fmt::Debug for GeocodingAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &std::any::type_name::<C>())
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create an adapter over the Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn nominatim(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config).map_err(map_geocoding_error)?;
        Ok(Self::new(client))
    }
}

impl<C: GeocodingClient> GeocodingAdapter<C> {
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

/// Map geocoding errors onto the application taxonomy
fn map_geocoding_error(err: GeocodingError) -> ApplicationError {
    match err {
        GeocodingError::AddressNotFound(query) => ApplicationError::LocationNotFound(query),
        GeocodingError::RateLimitExceeded => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl<C: GeocodingClient> GeocodingPort for GeocodingAdapter<C> {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<GeoLocation, ApplicationError> {
        self.client.geocode(place).await.map_err(|e| {
            warn!(error = %e, "Geocoding failed");
            map_geocoding_error(e)
        })
    }
}
