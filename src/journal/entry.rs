//! Journal entries and their creation.

use super::Mood;
use crate::constants::ENTRY_DATE_FORMAT;
use crate::errors::ValidationError;
use crate::weather::{ConditionCode, WeatherReport};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time weather attached to an entry at creation.
///
/// Field names on disk follow the original persisted layout (`temp`,
/// `location`); `temperature` and `locationName` are accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(rename = "temp", alias = "temperature")]
    pub temperature: f64,
    pub condition: ConditionCode,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "location", alias = "locationName", default)]
    pub location_name: String,
}

impl From<&WeatherReport> for WeatherSnapshot {
    fn from(report: &WeatherReport) -> Self {
        WeatherSnapshot {
            temperature: report.temperature_celsius,
            condition: report.condition,
            description: report.description.clone(),
            location_name: report.location_name.clone(),
        }
    }
}

/// One saved mood observation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Creation time in epoch milliseconds, bumped to stay unique.
    pub id: i64,
    pub date: DateTime<Utc>,
    pub formatted_date: String,
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
}

/// Validates a submission and builds the entry.
///
/// `last_id` is the newest id already handed out; the new id is the creation
/// instant in milliseconds, or `last_id + 1` if that would not be larger.
/// The note is taken as-is.
///
/// # Errors
///
/// - `ValidationError::MissingMood` when `mood_id` is empty or blank
/// - `ValidationError::UnknownMood` when it is not a defined mood
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mood_journal::journal::{create_entry, Mood};
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();
/// let entry = create_entry("calm", "slow morning", None, &now, None).unwrap();
///
/// assert_eq!(entry.mood, Mood::Calm);
/// assert_eq!(entry.formatted_date, "Thursday, October 15, 2026");
/// assert!(entry.weather.is_none());
/// ```
pub fn create_entry<Tz>(
    mood_id: &str,
    note: &str,
    weather: Option<WeatherSnapshot>,
    now: &DateTime<Tz>,
    last_id: Option<i64>,
) -> Result<JournalEntry, ValidationError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mood_id = mood_id.trim();
    if mood_id.is_empty() {
        return Err(ValidationError::MissingMood);
    }
    let mood =
        Mood::from_id(mood_id).ok_or_else(|| ValidationError::UnknownMood(mood_id.to_string()))?;

    let millis = now.timestamp_millis();
    let id = match last_id {
        Some(last) if millis <= last => last + 1,
        _ => millis,
    };

    Ok(JournalEntry {
        id,
        date: now.with_timezone(&Utc),
        formatted_date: now.format(ENTRY_DATE_FORMAT).to_string(),
        mood,
        note: note.to_string(),
        weather,
    })
}
