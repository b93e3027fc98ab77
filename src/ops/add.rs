//! Create a journal entry, attaching weather if it arrived in time.

use crate::errors::AppResult;
use crate::journal::{EntryStore, JournalEntry, WeatherSnapshot};
use crate::session::AppState;
use crate::storage::KeyValueStore;
use crate::weather::PendingWeather;
use chrono::{DateTime, TimeZone};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Result of an add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddReport {
    /// State after submission; carries the success or validation message.
    pub state: AppState,
    /// The stored entry, `None` when validation rejected the submission.
    pub saved: Option<JournalEntry>,
    /// Weather advisory to show the user, if any.
    pub advisory: Option<String>,
}

/// Submits `state` as a new entry.
///
/// # Flow
///
/// 1. Give the pending weather lookup up to `wait` to finish
/// 2. Snapshot the report if one arrived; a late report is dropped
/// 3. Validate and append through [`AppState::submit`]
///
/// # Errors
///
/// Returns an error only if persisting the entry fails. A rejected submission is
/// reported through `AddReport::state.error` with `saved == None`.
pub fn add_entry<S, Tz>(
    state: AppState,
    store: &mut EntryStore<S>,
    weather: Option<PendingWeather>,
    wait: Duration,
    now: &DateTime<Tz>,
) -> AppResult<AddReport>
where
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let outcome = weather.and_then(|mut pending| pending.wait(wait).cloned());
    if outcome.is_none() {
        debug!("Saving entry without weather");
    }

    let advisory = outcome.as_ref().and_then(|o| o.advisory.clone());
    let snapshot = outcome
        .and_then(|o| o.report)
        .map(|report| WeatherSnapshot::from(&report));

    let before = store.len();
    let state = state.submit(store, snapshot, now)?;
    let saved = if store.len() > before {
        store.all().first().cloned()
    } else {
        None
    };

    if let Some(entry) = &saved {
        info!("Added entry {} ({})", entry.id, entry.formatted_date);
    }

    Ok(AddReport {
        state,
        saved,
        advisory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_LOCATION_UNAVAILABLE, MSG_SELECT_MOOD, MSG_WEATHER_FALLBACK};
    use crate::journal::Mood;
    use crate::storage::MemoryStore;
    use crate::weather::{ConditionCode, WeatherOutcome, WeatherReport};
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_attaches_ready_weather() {
        let mut store = EntryStore::load(MemoryStore::new());
        let pending = PendingWeather::ready(WeatherOutcome {
            report: Some(WeatherReport::fallback()),
            advisory: Some(MSG_WEATHER_FALLBACK.to_string()),
        });

        let report = add_entry(
            AppState::default().select_mood("excited"),
            &mut store,
            Some(pending),
            Duration::from_millis(10),
            &now(),
        )
        .unwrap();

        let saved = report.saved.unwrap();
        assert_eq!(saved.mood, Mood::Excited);
        let weather = saved.weather.unwrap();
        assert_eq!(weather.condition, ConditionCode::Clouds);
        assert_eq!(weather.location_name, "Unknown");
        assert_eq!(report.advisory.as_deref(), Some(MSG_WEATHER_FALLBACK));
    }

    #[test]
    fn test_add_without_location_saves_without_weather() {
        let mut store = EntryStore::load(MemoryStore::new());
        let pending = PendingWeather::ready(WeatherOutcome {
            report: None,
            advisory: Some(MSG_LOCATION_UNAVAILABLE.to_string()),
        });

        let report = add_entry(
            AppState::default().select_mood("calm"),
            &mut store,
            Some(pending),
            Duration::from_millis(10),
            &now(),
        )
        .unwrap();

        assert!(report.saved.unwrap().weather.is_none());
        assert_eq!(report.advisory.as_deref(), Some(MSG_LOCATION_UNAVAILABLE));
    }

    #[test]
    fn test_rejected_add_reports_validation_message() {
        let mut store = EntryStore::load(MemoryStore::new());
        let report = add_entry(
            AppState::default(),
            &mut store,
            None,
            Duration::ZERO,
            &now(),
        )
        .unwrap();

        assert!(report.saved.is_none());
        assert!(store.is_empty());
        assert_eq!(report.state.error.as_deref(), Some(MSG_SELECT_MOOD));
    }
}
