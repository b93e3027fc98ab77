//! Core journal types: moods, entries, and the entry store.
//!
//! Entries are immutable once created. The store only ever prepends (newest
//! first); every derived view in [`crate::views`] works on a borrowed slice
//! and never mutates it.

pub mod entry;
pub mod mood;
pub mod store;

pub use entry::{create_entry, JournalEntry, WeatherSnapshot};
pub use mood::Mood;
pub use store::EntryStore;
