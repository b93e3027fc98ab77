use mockito::{Matcher, Server};
use mood_journal::errors::WeatherError;
use mood_journal::weather::{
    resolve_weather, ConditionCode, Coordinates, OpenWeatherClient, PendingWeather,
    WeatherProvider, WeatherReport,
};
use std::time::Duration;

const LONDON: Coordinates = Coordinates {
    latitude: 51.51,
    longitude: -0.13,
};

#[test]
fn test_current_weather_success() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lat".into(), "51.51".into()),
            Matcher::UrlEncoded("lon".into(), "-0.13".into()),
            Matcher::UrlEncoded("units".into(), "metric".into()),
            Matcher::UrlEncoded("appid".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "London",
                "main": {"temp": 14.2, "humidity": 81},
                "weather": [{"main": "Drizzle", "description": "light intensity drizzle"}]
            }"#,
        )
        .create();

    let client = OpenWeatherClient::new(server.url(), "test-key");
    let report = client.current_weather(LONDON).unwrap();

    mock.assert();
    assert_eq!(report.location_name, "London");
    assert_eq!(report.temperature_celsius, 14.2);
    assert_eq!(report.humidity_percent, 81.0);
    assert_eq!(report.condition, ConditionCode::Drizzle);
    assert_eq!(report.description, "light intensity drizzle");
}

#[test]
fn test_atmosphere_members_normalize() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"name": "Bay", "main": {"temp": 9, "humidity": 95},
                "weather": [{"main": "Fog", "description": "fog"}]}"#,
        )
        .create();

    let client = OpenWeatherClient::new(server.url(), "k");
    let report = client.current_weather(LONDON).unwrap();
    assert_eq!(report.condition, ConditionCode::Atmosphere);
}

#[test]
fn test_current_weather_http_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("Invalid API key")
        .create();

    let client = OpenWeatherClient::new(server.url(), "bad-key");
    let result = client.current_weather(LONDON);

    match result {
        Err(WeatherError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[test]
fn test_current_weather_malformed_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create();

    let client = OpenWeatherClient::new(server.url(), "k");
    let result = client.current_weather(LONDON);
    assert!(matches!(result, Err(WeatherError::InvalidResponse(_))));
}

#[test]
fn test_resolve_weather_falls_back_on_http_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    let client = OpenWeatherClient::new(server.url(), "k");
    let outcome = resolve_weather(&client, Some(LONDON));

    assert_eq!(outcome.report, Some(WeatherReport::fallback()));
    assert_eq!(
        outcome.advisory.as_deref(),
        Some("Unable to fetch weather data. Using sample data instead.")
    );
}

#[test]
fn test_pending_weather_against_server() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"name": "Lisbon", "main": {"temp": 24.5, "humidity": 40},
                "weather": [{"main": "Clear", "description": "clear sky"}]}"#,
        )
        .expect(1)
        .create();

    let client = OpenWeatherClient::new(server.url(), "k");
    let mut pending = PendingWeather::spawn(client, Some(LONDON));
    let outcome = pending.wait(Duration::from_secs(10)).cloned().unwrap();

    mock.assert();
    let report = outcome.report.unwrap();
    assert_eq!(report.location_name, "Lisbon");
    assert_eq!(report.condition, ConditionCode::Clear);
    assert!(outcome.advisory.is_none());
}

#[test]
fn test_unreachable_server_is_a_fetch_error() {
    // Nothing listens on port 9 on a test machine.
    let client = OpenWeatherClient::new("http://127.0.0.1:9", "k");
    let error = client.current_weather(LONDON).unwrap_err();

    assert!(matches!(error, WeatherError::Request(_)));
    assert!(error.is_fetch_error());
}
