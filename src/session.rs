//! Application state and the dark-mode preference.
//!
//! View state is an explicit value: each update function takes the state by
//! value and returns the next one. The only side effects happen in
//! [`AppState::submit`] (through the entry store) and [`Preferences::save`].

use crate::constants::{DARK_MODE_SLOT, MSG_ENTRY_SAVED};
use crate::errors::{AppError, AppResult};
use crate::journal::{create_entry, EntryStore, JournalEntry, Mood, WeatherSnapshot};
use crate::storage::KeyValueStore;
use crate::views::filter_by_mood;
use chrono::{DateTime, TimeZone};
use std::fmt;
use tracing::{info, warn};

/// Which view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Form,
    Calendar,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Mood picked in the entry form, as typed or selected.
    pub selected_mood: String,
    pub note: String,
    pub filter_mood: Option<Mood>,
    pub dark_mode: bool,
    pub view_mode: ViewMode,
    /// Dismissible error or advisory message.
    pub error: Option<String>,
    /// Dismissible success message.
    pub notification: Option<String>,
}

impl AppState {
    /// Starts from the persisted preferences.
    pub fn new(preferences: Preferences) -> Self {
        AppState {
            dark_mode: preferences.dark_mode,
            ..AppState::default()
        }
    }

    pub fn select_mood(self, mood_id: impl Into<String>) -> Self {
        AppState {
            selected_mood: mood_id.into(),
            ..self
        }
    }

    pub fn with_note(self, note: impl Into<String>) -> Self {
        AppState {
            note: note.into(),
            ..self
        }
    }

    pub fn set_filter(self, filter_mood: Option<Mood>) -> Self {
        AppState {
            filter_mood,
            ..self
        }
    }

    pub fn set_view(self, view_mode: ViewMode) -> Self {
        AppState { view_mode, ..self }
    }

    pub fn toggle_dark_mode(self) -> Self {
        AppState {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    /// Records a non-fatal message, e.g. a weather advisory.
    pub fn with_advisory(self, message: impl Into<String>) -> Self {
        AppState {
            error: Some(message.into()),
            ..self
        }
    }

    pub fn dismiss_messages(self) -> Self {
        AppState {
            error: None,
            notification: None,
            ..self
        }
    }

    /// Submits the entry form.
    ///
    /// On success the entry is appended to `store`, the form is cleared and a
    /// notification is set. A validation failure leaves `store` untouched and
    /// sets the error message instead; it is not returned as an `Err`.
    ///
    /// # Errors
    ///
    /// Only persistence failures from the store are returned.
    pub fn submit<S, Tz>(
        self,
        store: &mut EntryStore<S>,
        weather: Option<WeatherSnapshot>,
        now: &DateTime<Tz>,
    ) -> AppResult<Self>
    where
        S: KeyValueStore,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match create_entry(&self.selected_mood, &self.note, weather, now, store.last_id()) {
            Ok(entry) => {
                info!("Saving {} entry {}", entry.mood, entry.id);
                store.append(entry)?;
                Ok(AppState {
                    selected_mood: String::new(),
                    note: String::new(),
                    notification: Some(MSG_ENTRY_SAVED.to_string()),
                    ..self
                })
            }
            Err(validation) => {
                warn!("Entry rejected: {}", validation);
                Ok(AppState {
                    error: Some(validation.to_string()),
                    notification: None,
                    ..self
                })
            }
        }
    }

    /// Entries matching the current filter.
    pub fn visible_entries(&self, entries: &[JournalEntry]) -> Vec<JournalEntry> {
        filter_by_mood(entries, self.filter_mood)
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    /// Reads the `darkMode` slot. Anything other than `true` reads as false.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let dark_mode = match store.get(DARK_MODE_SLOT) {
            Ok(value) => value.map(|v| v.trim() == "true").unwrap_or(false),
            Err(e) => {
                warn!("Could not read '{}' slot: {}", DARK_MODE_SLOT, e);
                false
            }
        };
        Preferences { dark_mode }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), AppError> {
        store.set(DARK_MODE_SLOT, if self.dark_mode { "true" } else { "false" })
    }

    pub fn from_state(state: &AppState) -> Self {
        Preferences {
            dark_mode: state.dark_mode,
        }
    }
}
