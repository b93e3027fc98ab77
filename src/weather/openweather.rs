//! OpenWeatherMap HTTP client.
//!
//! Calls the current-weather endpoint in metric units and normalizes the
//! response into a [`WeatherReport`].

use super::{ConditionCode, Coordinates, WeatherProvider, WeatherReport};
use crate::errors::WeatherError;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// Response from the current-weather endpoint. Only the fields we use.
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    name: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    #[serde(default)]
    description: String,
}

impl CurrentWeatherResponse {
    fn normalize(self) -> Result<WeatherReport, WeatherError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::InvalidResponse("response has no weather conditions".to_string())
        })?;

        Ok(WeatherReport {
            location_name: self.name,
            temperature_celsius: self.main.temp,
            humidity_percent: self.main.humidity,
            condition: ConditionCode::from_group(&condition.main),
            description: condition.description,
        })
    }
}

/// Client for the OpenWeatherMap API.
pub struct OpenWeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenWeatherClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.openweathermap.org/data/2.5")
    /// * `api_key` - OpenWeatherMap application id
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn current_weather(&self, coords: Coordinates) -> Result<WeatherReport, WeatherError> {
        debug!("Fetching current weather");

        let url = format!("{}/weather", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .map_err(WeatherError::Request)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(WeatherError::Status { status, body });
        }

        let parsed: CurrentWeatherResponse = response.json().map_err(|e| {
            WeatherError::InvalidResponse(format!("Failed to parse weather response: {}", e))
        })?;

        let report = parsed.normalize()?;
        debug!("Received weather for {}", report.location_name);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenWeatherClient::new("http://localhost:1234", "key");
        assert_eq!(client.base_url, "http://localhost:1234");
        assert_eq!(client.api_key, "key");
    }

    #[test]
    fn test_normalize_uses_first_condition() {
        let raw = r#"{
            "name": "Sample City",
            "main": {"temp": 22.5, "humidity": 65},
            "weather": [
                {"main": "Clear", "description": "clear sky"},
                {"main": "Mist", "description": "mist"}
            ]
        }"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(raw).unwrap();
        let report = parsed.normalize().unwrap();

        assert_eq!(report.location_name, "Sample City");
        assert_eq!(report.temperature_celsius, 22.5);
        assert_eq!(report.humidity_percent, 65.0);
        assert_eq!(report.condition, ConditionCode::Clear);
        assert_eq!(report.description, "clear sky");
    }

    #[test]
    fn test_normalize_rejects_missing_conditions() {
        let raw = r#"{"name": "Nowhere", "main": {"temp": 1.0}, "weather": []}"#;
        let parsed: CurrentWeatherResponse = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            parsed.normalize(),
            Err(WeatherError::InvalidResponse(_))
        ));
    }
}
