//! Integration tests for the geocoding and routing clients (wiremock-based)

use std::time::Duration;

use domain::{LegMode, value_objects::GeoLocation};
use integration_geo::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient, OsrmConfig,
    OsrmRoutingClient, RoutingClient, RoutingError,
};
use tokio::time::Instant;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn nominatim_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        ..NominatimConfig::for_testing()
    }
}

fn osrm_for_mock(base_url: &str) -> OsrmConfig {
    OsrmConfig {
        base_url: base_url.to_string(),
        ..OsrmConfig::default()
    }
}

const fn sample_search_json() -> &'static str {
    r#"[
        {"lat": "57.7072326", "lon": "11.9670171", "display_name": "Göteborg, Sverige"},
        {"lat": "57.7000000", "lon": "11.9000000", "display_name": "Göteborg kommun"}
    ]"#
}

const fn sample_route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{
            "distance": 470123.4,
            "duration": 18000.0,
            "geometry": {
                "type": "LineString",
                "coordinates": [[11.967, 57.707], [14.2, 58.4], [18.068, 59.329]]
            }
        }],
        "waypoints": []
    }"#
}

fn gothenburg() -> GeoLocation {
    GeoLocation::new_unchecked(57.707, 11.967)
}

fn stockholm() -> GeoLocation {
    GeoLocation::new_unchecked(59.329, 18.068)
}

#[tokio::test]
async fn test_geocode_takes_first_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Gothenburg, Sweden"))
        .and(query_param("format", "json"))
        .and(header("user-agent", "EPD_Maps_App/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    let location = client.geocode("Gothenburg, Sweden").await.unwrap();

    assert!((location.latitude() - 57.707_232_6).abs() < 1e-9);
    assert!((location.longitude() - 11.967_017_1).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_empty_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    let result = client.geocode("Atlantis").await;

    assert!(matches!(result, Err(GeocodingError::AddressNotFound(q)) if q == "Atlantis"));
}

#[tokio::test]
async fn test_geocode_forbidden_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    let result = client.geocode("Gothenburg").await;

    assert!(matches!(result, Err(GeocodingError::RateLimitExceeded)));
}

#[tokio::test]
async fn test_geocode_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    let err = client.geocode("Gothenburg").await.unwrap_err();

    assert!(matches!(err, GeocodingError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_geocode_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    let result = client.geocode("Gothenburg").await;

    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}

#[tokio::test]
async fn test_geocode_cache_hit_skips_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_hours: 1,
        ..nominatim_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let first = client.geocode("Gothenburg").await.unwrap();
    let second = client.geocode("  GOTHENBURG ").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_geocode_without_cache_repeats_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = NominatimGeocodingClient::new(&nominatim_for_mock(&server.uri())).unwrap();
    client.geocode("Gothenburg").await.unwrap();
    client.geocode("Gothenburg").await.unwrap();
}

const REQUEST_DELAY_MS: u64 = 300;

async fn mount_search(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_geocode_pauses_before_every_request() {
    let server = MockServer::start().await;
    mount_search(&server, 2).await;

    let config = NominatimConfig {
        request_delay_ms: REQUEST_DELAY_MS,
        ..nominatim_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let started = Instant::now();
    client.geocode("Gothenburg").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(REQUEST_DELAY_MS));

    client.geocode("Stockholm").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2 * REQUEST_DELAY_MS));
}

#[tokio::test]
async fn test_geocode_cache_hit_skips_pause() {
    let server = MockServer::start().await;
    mount_search(&server, 1).await;

    let config = NominatimConfig {
        request_delay_ms: REQUEST_DELAY_MS,
        cache_ttl_hours: 1,
        ..nominatim_for_mock(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config).unwrap();

    let started = Instant::now();
    let first = client.geocode("Gothenburg").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(REQUEST_DELAY_MS));

    let cached_at = Instant::now();
    let second = client.geocode("gothenburg").await.unwrap();
    assert!(cached_at.elapsed() < Duration::from_millis(REQUEST_DELAY_MS));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_route_success_flips_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/11.967,57.707;18.068,59.329"))
        .and(query_param("overview", "full"))
        .and(query_param("geometries", "geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&server.uri())).unwrap();
    let leg = client.route(&gothenburg(), &stockholm()).await.unwrap();

    assert_eq!(leg.mode(), LegMode::Road);
    assert!((leg.distance_km() - 470.1234).abs() < 1e-9);
    assert_eq!(leg.polyline().len(), 3);
    assert!((leg.polyline()[0].latitude() - 57.707).abs() < f64::EPSILON);
    assert!((leg.polyline()[2].longitude() - 18.068).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_route_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&server.uri())).unwrap();
    let err = client.route(&gothenburg(), &stockholm()).await.unwrap_err();

    assert!(err.is_retryable());
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_route_without_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code": "NoRoute", "routes": []}"#),
        )
        .mount(&server)
        .await;

    let client = OsrmRoutingClient::new(&osrm_for_mock(&server.uri())).unwrap();
    let result = client.route(&gothenburg(), &stockholm()).await;

    assert!(matches!(result, Err(RoutingError::NoRoute { .. })));
}

#[tokio::test]
async fn test_route_connection_refused() {
    let client = OsrmRoutingClient::new(&osrm_for_mock("http://127.0.0.1:9")).unwrap();
    let result = client.route(&gothenburg(), &stockholm()).await;

    assert!(matches!(
        result,
        Err(RoutingError::ConnectionFailed(_) | RoutingError::Timeout)
    ));
}
