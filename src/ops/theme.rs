//! Dark mode preference changes.

use crate::errors::AppResult;
use crate::session::{AppState, Preferences};
use crate::storage::KeyValueStore;
use tracing::info;

/// Requested change to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Dark,
    Light,
    Toggle,
    /// Report only.
    Show,
}

/// Applies `change` to the stored preference and returns the result.
///
/// `Show` never writes.
pub fn apply_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    change: ThemeChange,
) -> AppResult<Preferences> {
    let state = AppState::new(Preferences::load(&*store));
    let state = match change {
        ThemeChange::Show => return Ok(Preferences::from_state(&state)),
        ThemeChange::Toggle => state.toggle_dark_mode(),
        ThemeChange::Dark if !state.dark_mode => state.toggle_dark_mode(),
        ThemeChange::Light if state.dark_mode => state.toggle_dark_mode(),
        ThemeChange::Dark | ThemeChange::Light => state,
    };

    let preferences = Preferences::from_state(&state);
    preferences.save(store)?;
    info!("Dark mode is now {}", preferences.dark_mode);
    Ok(preferences)
}
