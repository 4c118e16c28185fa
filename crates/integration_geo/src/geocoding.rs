//! Nominatim geocoding client
//!
//! Converts free-form place names to geographic coordinates using
//! the [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Every network request is preceded by a fixed pause (`request_delay_ms`)
//! to stay within the public instance's usage policy. An optional cache
//! keyed by the lower-cased query skips both the pause and the request.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use moka::future::Cache;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, instrument};

use crate::{config::NominatimConfig, error::GeocodingError, wire::NominatimResult};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form place name to geographic coordinates
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError>;
}

/// Nominatim-based geocoding client with request pacing and optional caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, GeoLocation>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = (config.cache_ttl_hours > 0).then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    async fn pause(&self) {
        if self.config.request_delay_ms > 0 {
            let wait = Duration::from_millis(self.config.request_delay_ms);
            debug!(?wait, "Pausing before geocoding request");
            tokio::time::sleep(wait).await;
        }
    }

    async fn fetch(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
        self.pause().await;

        let url = format!("{}/search", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        match response.status() {
            StatusCode::OK => {},
            StatusCode::FORBIDDEN => return Err(GeocodingError::RateLimitExceeded),
            status => {
                return Err(GeocodingError::RequestFailed(format!(
                    "Error fetching coordinates for {query}. Status code: {}",
                    status.as_u16()
                )));
            },
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let first = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(query.to_string()))?;
        let location = first.location().map_err(GeocodingError::ParseError)?;

        debug!(
            %query,
            lat = location.latitude(),
            lon = location.longitude(),
            display_name = first.display_name.as_deref().unwrap_or_default(),
            "Geocoded place"
        );
        Ok(location)
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<GeoLocation, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Location must not be empty".to_string(),
            ));
        }

        let Some(cache) = &self.cache else {
            return self.fetch(query).await;
        };

        let cache_key = query.to_lowercase();
        if let Some(location) = cache.get(&cache_key).await {
            debug!(%query, "Geocoding cache hit");
            return Ok(location);
        }

        let location = self.fetch(query).await?;
        cache.insert(cache_key, location).await;
        Ok(location)
    }
}
