//! Integration tests for the WeatherAPI client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{WeatherApiClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const TEST_KEY: &str = "test-key";

fn sample_current_response(temp_c: f64) -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Sao Paulo",
            "region": "Sao Paulo",
            "country": "Brazil",
            "lat": -23.53,
            "lon": -46.62,
            "tz_id": "America/Sao_Paulo"
        },
        "current": {
            "last_updated": "2024-01-15 12:00",
            "temp_c": temp_c,
            "temp_f": temp_c * 1.8 + 32.0,
            "is_day": 1,
            "condition": {"text": "Partly cloudy", "code": 1003},
            "humidity": 70
        }
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> WeatherApiClient {
    let config = WeatherConfig {
        base_url: format!("{}/v1/current.json", mock_server.uri()),
        api_key: Some(SecretString::from(TEST_KEY)),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    WeatherApiClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_temperature_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", TEST_KEY))
        .and(query_param("q", "Sao Paulo"))
        .and(query_param("aqi", "no"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response(22.5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Sao Paulo").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    assert!((result.unwrap() - 22.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_city_with_accents_and_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    // query_param compares against the decoded value, so a match proves the
    // name survived encoding intact
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "São José dos Campos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response(18.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("São José dos Campos").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_negative_temperature() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response(-4.0)))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let temp = client.current_temp_c("Urupema").await.unwrap();

    assert!((temp + 4.0).abs() < f64::EPSILON);
}

// ============================================================================
// Missing credential
// ============================================================================

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response(20.0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = WeatherConfig {
        base_url: format!("{}/v1/current.json", mock_server.uri()),
        api_key: None,
        timeout_secs: 5,
    };
    let client = WeatherApiClient::new(config).unwrap();
    let result = client.current_temp_c("Recife").await;

    assert!(
        matches!(result, Err(WeatherError::MissingApiKey)),
        "Expected MissingApiKey, got: {result:?}"
    );
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_unknown_location_returns_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Nowhere").await;

    assert!(
        matches!(result, Err(WeatherError::Api { code: 1006, .. })),
        "Expected Api error 1006, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Sao Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Sao Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_temperature_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"current": {}})),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Sao Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_temp_c("Sao Paulo").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}
