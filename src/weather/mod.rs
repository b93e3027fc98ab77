//! Weather provider boundary.
//!
//! Weather is fetched once, from the configured coordinates, and attached to
//! entries created after the fetch resolved. It is never attached retroactively.
//!
//! # Module Structure
//!
//! - `openweather`: HTTP client for the OpenWeatherMap current-weather API
//! - `pending`: non-blocking handle around an in-flight fetch

pub mod openweather;
pub mod pending;

pub use openweather::OpenWeatherClient;
pub use pending::PendingWeather;

use crate::constants::{
    FALLBACK_DESCRIPTION, FALLBACK_HUMIDITY_PERCENT, FALLBACK_LOCATION_NAME,
    FALLBACK_TEMPERATURE_CELSIUS, MSG_LOCATION_UNAVAILABLE, MSG_WEATHER_FALLBACK,
};
use crate::errors::WeatherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized weather condition group.
///
/// Persisted as its name (`"Clear"`, `"Clouds"`, ...). Unrecognized names read
/// back as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConditionCode {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Atmosphere,
    Other,
}

impl ConditionCode {
    /// Maps an OpenWeatherMap `weather[].main` group onto a condition.
    ///
    /// The atmosphere group (mist, smoke, haze, dust, fog, sand, ash, squall,
    /// tornado) is reported by its member names, so those map to `Atmosphere`.
    pub fn from_group(group: &str) -> Self {
        match group {
            "Clear" => ConditionCode::Clear,
            "Clouds" => ConditionCode::Clouds,
            "Rain" => ConditionCode::Rain,
            "Snow" => ConditionCode::Snow,
            "Thunderstorm" => ConditionCode::Thunderstorm,
            "Drizzle" => ConditionCode::Drizzle,
            "Atmosphere" | "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash"
            | "Squall" | "Tornado" => ConditionCode::Atmosphere,
            _ => ConditionCode::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCode::Clear => "Clear",
            ConditionCode::Clouds => "Clouds",
            ConditionCode::Rain => "Rain",
            ConditionCode::Snow => "Snow",
            ConditionCode::Thunderstorm => "Thunderstorm",
            ConditionCode::Drizzle => "Drizzle",
            ConditionCode::Atmosphere => "Atmosphere",
            ConditionCode::Other => "Other",
        }
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ConditionCode {
    fn from(value: String) -> Self {
        ConditionCode::from_group(&value)
    }
}

impl From<ConditionCode> for String {
    fn from(value: ConditionCode) -> Self {
        value.as_str().to_string()
    }
}

/// A normalized current-weather record.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location_name: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub condition: ConditionCode,
    pub description: String,
}

impl WeatherReport {
    /// The record substituted when a fetch fails.
    pub fn fallback() -> Self {
        WeatherReport {
            location_name: FALLBACK_LOCATION_NAME.to_string(),
            temperature_celsius: FALLBACK_TEMPERATURE_CELSIUS,
            humidity_percent: FALLBACK_HUMIDITY_PERCENT,
            condition: ConditionCode::Clouds,
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Source of current weather for a location.
pub trait WeatherProvider {
    fn current_weather(&self, coords: Coordinates) -> Result<WeatherReport, WeatherError>;
}

/// What a single weather lookup produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherOutcome {
    /// Weather to attach to new entries; `None` when no location was available.
    pub report: Option<WeatherReport>,
    /// Non-fatal message for the user.
    pub advisory: Option<String>,
}

/// Performs one weather lookup and folds every failure into the outcome.
///
/// - No location: no report, location advisory.
/// - Fetch failure: fallback report, fallback advisory. There is no retry.
pub fn resolve_weather<P>(provider: &P, location: Option<Coordinates>) -> WeatherOutcome
where
    P: WeatherProvider + ?Sized,
{
    let Some(coords) = location else {
        let error = WeatherError::LocationUnavailable("no coordinates configured".to_string());
        warn!("{}", error);
        return WeatherOutcome {
            report: None,
            advisory: Some(MSG_LOCATION_UNAVAILABLE.to_string()),
        };
    };

    match provider.current_weather(coords) {
        Ok(report) => {
            info!(
                "Weather resolved: {} ({})",
                report.condition, report.description
            );
            WeatherOutcome {
                report: Some(report),
                advisory: None,
            }
        }
        Err(error) => {
            warn!("Weather fetch failed, using fallback: {}", error);
            let advisory = if error.is_fetch_error() {
                MSG_WEATHER_FALLBACK
            } else {
                MSG_LOCATION_UNAVAILABLE
            };
            WeatherOutcome {
                report: error
                    .is_fetch_error()
                    .then(WeatherReport::fallback),
                advisory: Some(advisory.to_string()),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedProvider(pub Result<WeatherReport, u16>);

    impl WeatherProvider for FixedProvider {
        fn current_weather(&self, _coords: Coordinates) -> Result<WeatherReport, WeatherError> {
            match &self.0 {
                Ok(report) => Ok(report.clone()),
                Err(status) => Err(WeatherError::Status {
                    status: *status,
                    body: "unavailable".to_string(),
                }),
            }
        }
    }

    pub(crate) fn sunny() -> WeatherReport {
        WeatherReport {
            location_name: "Lisbon".to_string(),
            temperature_celsius: 22.5,
            humidity_percent: 65.0,
            condition: ConditionCode::Clear,
            description: "clear sky".to_string(),
        }
    }

    const HERE: Coordinates = Coordinates {
        latitude: 38.72,
        longitude: -9.14,
    };

    #[test]
    fn test_condition_code_mapping() {
        assert_eq!(ConditionCode::from_group("Rain"), ConditionCode::Rain);
        assert_eq!(ConditionCode::from_group("Fog"), ConditionCode::Atmosphere);
        assert_eq!(ConditionCode::from_group("Volcano"), ConditionCode::Other);
        assert_eq!(ConditionCode::Thunderstorm.to_string(), "Thunderstorm");
    }

    #[test]
    fn test_resolve_weather_success() {
        let outcome = resolve_weather(&FixedProvider(Ok(sunny())), Some(HERE));
        assert_eq!(outcome.report, Some(sunny()));
        assert!(outcome.advisory.is_none());
    }

    #[test]
    fn test_resolve_weather_failure_substitutes_fallback() {
        let outcome = resolve_weather(&FixedProvider(Err(503)), Some(HERE));

        let report = outcome.report.expect("fallback should be substituted");
        assert_eq!(report, WeatherReport::fallback());
        assert_eq!(report.location_name, "Unknown");
        assert_eq!(report.temperature_celsius, 20.0);
        assert_eq!(report.condition, ConditionCode::Clouds);
        assert_eq!(outcome.advisory.as_deref(), Some(MSG_WEATHER_FALLBACK));
    }

    #[test]
    fn test_resolve_weather_without_location() {
        let outcome = resolve_weather(&FixedProvider(Ok(sunny())), None);
        assert!(outcome.report.is_none());
        assert_eq!(outcome.advisory.as_deref(), Some(MSG_LOCATION_UNAVAILABLE));
    }
}
