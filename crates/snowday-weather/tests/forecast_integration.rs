//! Integration tests for WeatherProvider using wiremock.

#![allow(clippy::unwrap_used, clippy::panic)]

use snowday_core::{Config, NetworkError};
use snowday_weather::{build_client, SnowDayError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> WeatherProvider {
    let mut config = Config::default();
    config.forecast.base_url = server.uri();
    WeatherProvider::new(build_client(&config.http).unwrap(), &config.forecast)
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 44.98,
        "longitude": -93.26,
        "timezone": "America/Chicago",
        "current": {
            "time": "2026-01-15T07:00",
            "temperature_2m": -14.2,
            "precipitation": 1.1,
            "snowfall": 0.9,
            "weather_code": 75
        },
        "daily": {
            "time": ["2026-01-15"],
            "temperature_2m_min": [-18.0],
            "temperature_2m_max": [-9.5],
            "snowfall_sum": [17.5],
            "precipitation_sum": [12.0]
        }
    })
}

#[tokio::test]
async fn test_fetch_requests_today_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "44.98"))
        .and(query_param("longitude", "-93.26"))
        .and(query_param(
            "current",
            "temperature_2m,precipitation,snowfall,weather_code",
        ))
        .and(query_param(
            "daily",
            "temperature_2m_min,temperature_2m_max,snowfall_sum,precipitation_sum",
        ))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = provider_for(&mock_server).fetch(44.98, -93.26).await.unwrap();

    assert_eq!(snapshot.current_temperature_c, Some(-14.2));
    assert_eq!(snapshot.daily_min_temp_c, Some(-18.0));
    assert_eq!(snapshot.daily_snowfall_cm, Some(17.5));
    assert_eq!(snapshot.weather_code, Some(75));
    assert_eq!(
        snapshot.forecast_date.map(|d| d.to_string()),
        Some("2026-01-15".to_string())
    );
}

#[tokio::test]
async fn test_fetch_missing_daily_is_invalid_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": { "temperature_2m": -3.0 }
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).fetch(45.0, -75.0).await.unwrap_err();
    assert!(matches!(err, SnowDayError::InvalidData(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_null_fields_are_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": { "temperature_2m": null },
            "daily": { "time": ["2026-01-15"], "snowfall_sum": [null] }
        })))
        .mount(&mock_server)
        .await;

    let snapshot = provider_for(&mock_server).fetch(45.0, -75.0).await.unwrap();
    assert_eq!(snapshot.current_temperature_c, None);
    assert_eq!(snapshot.daily_snowfall_cm, None);
    assert_eq!(snapshot.daily_max_temp_c, None);
}

#[tokio::test]
async fn test_fetch_bad_request_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90°."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).fetch(95.0, 0.0).await.unwrap_err();
    match err {
        SnowDayError::Network(NetworkError::ServerError { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("Latitude"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_unreachable_server_is_network_error() {
    let mock_server = MockServer::start().await;
    let provider = provider_for(&mock_server);
    drop(mock_server);

    let err = provider.fetch(45.0, -75.0).await.unwrap_err();
    assert!(matches!(err, SnowDayError::Network(_)), "got {err:?}");
}
