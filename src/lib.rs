/*!
# Mood Journal

A personal mood journal. Each entry records one of five moods, an optional note,
and the current weather when it is available. Entries are kept in a local
key-value store and can be browsed as a list, a month calendar, or mood
statistics, and exported as CSV. A small headline browser with persisted
favorites and a dark-mode preference round things out.

## Architecture

- `cli`: Command-line interface handling using clap, plus text rendering
- `config`: Environment-driven configuration loading and validation
- `errors`: Error handling infrastructure
- `storage`: Key-value slot stores (file-backed and in-memory)
- `journal`: Moods, entries, entry creation and the entry store
- `views`: Derived views (filtering, calendar, statistics)
- `export`: CSV export
- `weather`: Weather provider boundary, fallback handling and async lookup
- `news`: Headline provider, search, paging and favorites
- `session`: Application state and preferences
- `ops`: User-facing operations used by the binary

## Usage Example

```rust,no_run
use chrono::Local;
use mood_journal::journal::EntryStore;
use mood_journal::session::AppState;
use mood_journal::storage::FileStore;
use mood_journal::Config;

fn main() -> mood_journal::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let mut store = EntryStore::load(FileStore::open(&config.data_dir)?);
    let state = AppState::default().select_mood("calm").with_note("slow morning");
    let state = state.submit(&mut store, None, &Local::now())?;

    println!("{}", state.notification.unwrap_or_default());
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CSV export of entries
pub mod export;
/// Moods, entries and the entry store
pub mod journal;
/// Headline browsing
pub mod news;
/// Operations behind the command-line front end
pub mod ops;
/// Application state and preferences
pub mod session;
/// Persisted key-value slots
pub mod storage;
/// Derived views over entries
pub mod views;
/// Current weather lookup
pub mod weather;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
