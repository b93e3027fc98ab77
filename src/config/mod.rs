//! Configuration management for the mood journal.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It covers the data directory holding the
//! persisted slots, the coordinates used for weather lookups, and the weather and
//! news provider endpoints.
//!
//! # Environment Variables
//!
//! - `MOOD_JOURNAL_DIR`: Data directory (defaults to ~/.mood-journal)
//! - `MOOD_JOURNAL_LATITUDE` / `MOOD_JOURNAL_LONGITUDE`: Location for weather lookups
//! - `MOOD_JOURNAL_WEATHER_URL`, `OPENWEATHER_API_KEY`: Weather provider
//! - `MOOD_JOURNAL_WEATHER_WAIT_MS`: How long `add` lets the weather fetch run
//! - `MOOD_JOURNAL_NEWS_URL`, `GNEWS_API_KEY`, `MOOD_JOURNAL_NEWS_COUNTRY`,
//!   `MOOD_JOURNAL_NEWS_LANG`, `MOOD_JOURNAL_NEWS_PAGE_SIZE`: Headline provider
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_NEWS_COUNTRY, DEFAULT_NEWS_LANG, DEFAULT_NEWS_PAGE_SIZE,
    DEFAULT_NEWS_URL, DEFAULT_WEATHER_API_KEY, DEFAULT_WEATHER_URL, DEFAULT_WEATHER_WAIT_MS,
    ENV_VAR_DATA_DIR, ENV_VAR_HOME, ENV_VAR_LATITUDE, ENV_VAR_LONGITUDE, ENV_VAR_NEWS_API_KEY,
    ENV_VAR_NEWS_COUNTRY, ENV_VAR_NEWS_LANG, ENV_VAR_NEWS_PAGE_SIZE, ENV_VAR_NEWS_URL,
    ENV_VAR_WEATHER_API_KEY, ENV_VAR_WEATHER_URL, ENV_VAR_WEATHER_WAIT_MS,
};
use crate::errors::{AppError, AppResult};
use crate::weather::Coordinates;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for the mood journal.
///
/// # Examples
///
/// Loading configuration from environment variables:
/// ```no_run
/// use mood_journal::Config;
/// use std::env;
///
/// env::set_var("MOOD_JOURNAL_DIR", "/custom/journal/path");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert!(config.location.is_none());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory where the persisted slots live.
    pub data_dir: PathBuf,

    /// Coordinates for weather lookups; `None` when no location is configured.
    pub location: Option<Coordinates>,

    /// Base URL of the OpenWeatherMap API.
    pub weather_api_url: String,

    /// OpenWeatherMap API key.
    pub weather_api_key: String,

    /// How long the `add` command lets the weather fetch run before saving without it.
    pub weather_wait: Duration,

    /// Base URL of the GNews API.
    pub news_api_url: String,

    /// GNews API key.
    pub news_api_key: String,

    /// Country filter for headlines.
    pub news_country: String,

    /// Language filter for headlines.
    pub news_lang: String,

    /// Headlines per page.
    pub news_page_size: u32,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("location", &self.location.map(|_| "[REDACTED_LOCATION]"))
            .field("weather_api_url", &self.weather_api_url)
            .field("weather_api_key", &"[REDACTED]")
            .field("weather_wait", &self.weather_wait)
            .field("news_api_url", &self.news_api_url)
            .field("news_api_key", &"[REDACTED]")
            .field("news_country", &self.news_country)
            .field("news_lang", &self.news_lang)
            .field("news_page_size", &self.news_page_size)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            location: None,
            weather_api_url: DEFAULT_WEATHER_URL.to_string(),
            weather_api_key: DEFAULT_WEATHER_API_KEY.to_string(),
            weather_wait: Duration::from_millis(DEFAULT_WEATHER_WAIT_MS),
            news_api_url: DEFAULT_NEWS_URL.to_string(),
            news_api_key: String::new(),
            news_country: DEFAULT_NEWS_COUNTRY.to_string(),
            news_lang: DEFAULT_NEWS_LANG.to_string(),
            news_page_size: DEFAULT_NEWS_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - Only one of latitude/longitude is set, or either fails to parse
    /// - A numeric setting fails to parse
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_DATA_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let location = Self::load_location()?;

        let weather_wait_ms: u64 = parse_env(ENV_VAR_WEATHER_WAIT_MS)?
            .unwrap_or(DEFAULT_WEATHER_WAIT_MS);
        let news_page_size: u32 =
            parse_env(ENV_VAR_NEWS_PAGE_SIZE)?.unwrap_or(DEFAULT_NEWS_PAGE_SIZE);

        let config = Config {
            data_dir,
            location,
            weather_api_url: env_or(ENV_VAR_WEATHER_URL, DEFAULT_WEATHER_URL),
            weather_api_key: env_or(ENV_VAR_WEATHER_API_KEY, DEFAULT_WEATHER_API_KEY),
            weather_wait: Duration::from_millis(weather_wait_ms),
            news_api_url: env_or(ENV_VAR_NEWS_URL, DEFAULT_NEWS_URL),
            news_api_key: env_or(ENV_VAR_NEWS_API_KEY, ""),
            news_country: env_or(ENV_VAR_NEWS_COUNTRY, DEFAULT_NEWS_COUNTRY),
            news_lang: env_or(ENV_VAR_NEWS_LANG, DEFAULT_NEWS_LANG),
            news_page_size,
        };

        Ok(config)
    }

    fn load_location() -> AppResult<Option<Coordinates>> {
        let latitude: Option<f64> = parse_env(ENV_VAR_LATITUDE)?;
        let longitude: Option<f64> = parse_env(ENV_VAR_LONGITUDE)?;

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(Coordinates {
                latitude,
                longitude,
            })),
            (None, None) => Ok(None),
            _ => Err(AppError::Config(format!(
                "{} and {} must be set together",
                ENV_VAR_LATITUDE, ENV_VAR_LONGITUDE
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when:
    /// - the data directory is empty or relative
    /// - the coordinates are out of range
    /// - the news page size is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use mood_journal::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid_config = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    ///     ..Config::default()
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// let invalid_config = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    ///     ..Config::default()
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if let Some(coords) = self.location {
            if !(-90.0..=90.0).contains(&coords.latitude) {
                return Err(AppError::Config(format!(
                    "Latitude {} is out of range (-90 to 90)",
                    coords.latitude
                )));
            }
            if !(-180.0..=180.0).contains(&coords.longitude) {
                return Err(AppError::Config(format!(
                    "Longitude {} is out of range (-180 to 180)",
                    coords.longitude
                )));
            }
        }

        if self.news_page_size == 0 {
            return Err(AppError::Config(
                "News page size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}
