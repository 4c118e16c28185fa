//! Integration tests for the infrastructure adapters
//!
//! Tests cover:
//! - Transport estimates through the Nominatim and OSRM adapters (wiremock)
//! - Error mapping from the HTTP clients to application errors
//! - Login through the configured credential store

use std::sync::Arc;

use application::{
    ApplicationError, AuthService, Origin, TransportEmissionService, TransportRequest,
};
use domain::{LegKind, LegMode, value_objects::{GeoLocation, VehicleClass}};
use infrastructure::{
    AuthConfig, ConfigCredentialVerifier, GeocodingAdapter, GreatCircleSeaRouter, PasswordHasher,
    RoadRoutingAdapter, UserEntry,
};
use integration_geo::{NominatimConfig, OsrmConfig};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

async fn mount_place(server: &MockServer, query: &str, lat: f64, lon: f64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"[{{"lat": "{lat}", "lon": "{lon}", "display_name": "{query}"}}]"#
        )))
        .mount(server)
        .await;
}

async fn mount_road(server: &MockServer, distance_m: f64) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/.+"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"{{"code": "Ok", "routes": [{{"distance": {distance_m},
                "geometry": {{"type": "LineString", "coordinates": [[11.9, 57.8], [18.07, 59.33]]}}}}]}}"#
        )))
        .mount(server)
        .await;
}

fn service(server: &MockServer) -> TransportEmissionService {
    let geocoder = GeocodingAdapter::nominatim(&NominatimConfig {
        base_url: server.uri(),
        ..NominatimConfig::for_testing()
    })
    .unwrap();
    let road = RoadRoutingAdapter::osrm(&OsrmConfig {
        base_url: server.uri(),
        ..OsrmConfig::default()
    })
    .unwrap();

    TransportEmissionService::new(
        Arc::new(geocoder),
        Arc::new(road),
        Arc::new(GreatCircleSeaRouter::new()),
    )
}

// ============================================================================
// Transport estimate tests
// ============================================================================

mod transport_tests {
    use super::*;

    #[tokio::test]
    async fn direct_road_estimate() {
        let server = MockServer::start().await;
        mount_place(&server, "Kärra", 57.8, 11.9).await;
        mount_place(&server, "Stockholm", 59.33, 18.07).await;
        mount_road(&server, 100_000.0).await;

        let request = TransportRequest::new(
            Origin::Place("Kärra".to_string()),
            "Stockholm",
            VehicleClass::Van,
            2.0,
        );
        let estimate = service(&server).estimate(&request).await.unwrap();

        assert_eq!(estimate.legs().len(), 1);
        assert_eq!(estimate.legs()[0].kind(), LegKind::Direct);
        assert!((estimate.total_distance_km() - 100.0).abs() < 1e-9);
        assert!((estimate.total_co2_kg() - 59.6).abs() < 1e-9);
        assert!(estimate.format_summary().starts_with("Total route distance: 100.00 km"));
    }

    #[tokio::test]
    async fn multi_leg_estimate_adds_sea_leg() {
        let server = MockServer::start().await;
        mount_place(&server, "Kärra", 57.8, 11.9).await;
        mount_place(&server, "Berlin", 52.52, 13.4).await;
        mount_place(&server, "Gothenburg port", 57.7, 11.9).await;
        mount_place(&server, "Rostock port", 54.15, 12.1).await;
        mount_road(&server, 50_000.0).await;

        let request = TransportRequest::new(
            Origin::Place("Kärra".to_string()),
            "Berlin",
            VehicleClass::TruckOver32,
            10.0,
        )
        .with_sea_leg("Gothenburg port", "Rostock port");
        let estimate = service(&server).estimate(&request).await.unwrap();

        let modes: Vec<_> = estimate.legs().iter().map(|l| l.mode()).collect();
        assert_eq!(modes, vec![LegMode::Road, LegMode::Sea, LegMode::Road]);

        let sea_km = GeoLocation::new_unchecked(57.7, 11.9)
            .distance_km(&GeoLocation::new_unchecked(54.15, 12.1));
        let expected = 2.0 * 50.0 * 0.679 * 10.0 + sea_km * 0.015 * 10.0;
        assert!((estimate.total_distance_km() - (100.0 + sea_km)).abs() < 1e-6);
        assert!((estimate.total_co2_kg() - expected).abs() < 1e-6);
    }

    #[tokio::test]
    async fn unknown_destination_aborts_estimate() {
        let server = MockServer::start().await;
        mount_place(&server, "Kärra", 57.8, 11.9).await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Atlantis"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/.*"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let request = TransportRequest::new(
            Origin::Place("Kärra".to_string()),
            "Atlantis",
            VehicleClass::Van,
            1.0,
        );
        let err = service(&server).estimate(&request).await.unwrap_err();

        match err {
            ApplicationError::LocationResolution { place, source } => {
                assert_eq!(place, "Atlantis");
                assert!(matches!(*source, ApplicationError::LocationNotFound(_)));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn road_failure_yields_empty_estimate() {
        let server = MockServer::start().await;
        mount_place(&server, "Kärra", 57.8, 11.9).await;
        mount_place(&server, "Stockholm", 59.33, 18.07).await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/route/.*"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let request = TransportRequest::new(
            Origin::Place("Kärra".to_string()),
            "Stockholm",
            VehicleClass::Truck7To16,
            5.0,
        );
        let estimate = service(&server).estimate(&request).await.unwrap();

        assert!(estimate.is_empty());
        assert!(estimate.total_co2_kg().abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn forbidden_geocoder_is_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let request = TransportRequest::new(
            Origin::Place("Kärra".to_string()),
            "Stockholm",
            VehicleClass::Van,
            1.0,
        );
        let err = service(&server).estimate(&request).await.unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(
            err,
            ApplicationError::LocationResolution { ref source, .. }
                if matches!(**source, ApplicationError::RateLimited)
        ));
    }
}

// ============================================================================
// Authentication tests
// ============================================================================

mod auth_tests {
    use super::*;

    fn auth_service() -> AuthService {
        let hasher = PasswordHasher::new();
        let config = AuthConfig {
            users: vec![UserEntry {
                username: "admin".to_string(),
                password_hash: hasher.hash("admin123").unwrap(),
            }],
        };
        AuthService::new(Arc::new(ConfigCredentialVerifier::new(&config)))
    }

    #[test]
    fn login_with_configured_user() {
        let session = auth_service().login("admin", "admin123").unwrap();
        assert_eq!(session.username(), "admin");
    }

    #[test]
    fn login_rejects_bad_credentials() {
        let service = auth_service();
        let wrong = service.login("admin", "nope").unwrap_err();
        let unknown = service.login("ghost", "admin123").unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
    }
}
