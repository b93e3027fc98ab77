//! Constants used throughout the application.
//!
//! This module contains all constants used in the mood journal, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mood-journal";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A mood journal with weather snapshots and a headline browser";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the data directory holding the persisted slots.
pub const ENV_VAR_DATA_DIR: &str = "MOOD_JOURNAL_DIR";
/// Environment variable for the latitude used for weather lookups.
pub const ENV_VAR_LATITUDE: &str = "MOOD_JOURNAL_LATITUDE";
/// Environment variable for the longitude used for weather lookups.
pub const ENV_VAR_LONGITUDE: &str = "MOOD_JOURNAL_LONGITUDE";
/// Environment variable overriding the weather API base URL.
pub const ENV_VAR_WEATHER_URL: &str = "MOOD_JOURNAL_WEATHER_URL";
/// Environment variable holding the OpenWeatherMap API key.
pub const ENV_VAR_WEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment variable for how long `add` waits on the weather fetch.
pub const ENV_VAR_WEATHER_WAIT_MS: &str = "MOOD_JOURNAL_WEATHER_WAIT_MS";
/// Environment variable overriding the news API base URL.
pub const ENV_VAR_NEWS_URL: &str = "MOOD_JOURNAL_NEWS_URL";
/// Environment variable holding the GNews API key.
pub const ENV_VAR_NEWS_API_KEY: &str = "GNEWS_API_KEY";
/// Environment variable for the news country filter.
pub const ENV_VAR_NEWS_COUNTRY: &str = "MOOD_JOURNAL_NEWS_COUNTRY";
/// Environment variable for the news language filter.
pub const ENV_VAR_NEWS_LANG: &str = "MOOD_JOURNAL_NEWS_LANG";
/// Environment variable for the number of headlines per page.
pub const ENV_VAR_NEWS_PAGE_SIZE: &str = "MOOD_JOURNAL_NEWS_PAGE_SIZE";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".mood-journal";

// Provider Defaults
/// Default OpenWeatherMap API base URL.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";
/// Key used when no OpenWeatherMap key is configured. The API rejects it.
pub const DEFAULT_WEATHER_API_KEY: &str = "DEMO_API_KEY";
/// Default time `add` lets the weather fetch run, in milliseconds.
pub const DEFAULT_WEATHER_WAIT_MS: u64 = 5000;
/// Default GNews API base URL.
pub const DEFAULT_NEWS_URL: &str = "https://gnews.io/api/v4";
/// Default news country.
pub const DEFAULT_NEWS_COUNTRY: &str = "us";
/// Default news language.
pub const DEFAULT_NEWS_LANG: &str = "en";
/// Default number of headlines per page.
pub const DEFAULT_NEWS_PAGE_SIZE: u32 = 8;
/// Default headline category.
pub const DEFAULT_NEWS_CATEGORY: &str = "general";
/// Suffix of the headline browser title.
pub const NEWS_TITLE_SUFFIX: &str = "NeighborGood News";

// Persistence Slots
/// Slot holding the serialized entry list.
pub const ENTRIES_SLOT: &str = "moodEntries";
/// Slot holding the dark-mode preference.
pub const DARK_MODE_SLOT: &str = "darkMode";
/// Slot holding the favorite headlines.
pub const FAVORITES_SLOT: &str = "favoriteHeadlines";
/// File extension for slot files.
pub const SLOT_FILE_EXTENSION: &str = "json";
/// Name of the lock file guarding the data directory.
pub const STORE_LOCK_FILE: &str = ".lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// CSV Export
/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Date,Mood,Note,Weather Condition,Temperature,Location";
/// File name offered for the CSV download.
pub const CSV_FILE_NAME: &str = "mood-journal.csv";
/// MIME type of the CSV download.
pub const CSV_MIME_TYPE: &str = "text/csv";
/// Placeholder for absent weather columns.
pub const CSV_NOT_AVAILABLE: &str = "N/A";

// Date/Time Logic
/// Human-readable entry date, e.g. "Wednesday, October 15, 2026".
pub const ENTRY_DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// Numeric day key, e.g. "10/15/2026".
pub const DAY_KEY_FORMAT: &str = "%-m/%-d/%Y";
/// Month argument format for the calendar command.
pub const MONTH_ARG_FORMAT: &str = "%Y-%m";

// Weather Fallback
/// Location name of the fallback weather record.
pub const FALLBACK_LOCATION_NAME: &str = "Unknown";
/// Temperature of the fallback weather record.
pub const FALLBACK_TEMPERATURE_CELSIUS: f64 = 20.0;
/// Humidity of the fallback weather record.
pub const FALLBACK_HUMIDITY_PERCENT: f64 = 60.0;
/// Description of the fallback weather record.
pub const FALLBACK_DESCRIPTION: &str = "scattered clouds";

// User-facing Messages
/// Shown when an entry is submitted without a mood.
pub const MSG_SELECT_MOOD: &str = "Please select a mood";
/// Shown after an entry has been saved.
pub const MSG_ENTRY_SAVED: &str = "Journal entry saved successfully!";
/// Advisory shown when no location is available.
pub const MSG_LOCATION_UNAVAILABLE: &str =
    "Unable to access your location. Please check your settings.";
/// Advisory shown when the weather fetch failed and the fallback is used.
pub const MSG_WEATHER_FALLBACK: &str = "Unable to fetch weather data. Using sample data instead.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "mood-journal";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
