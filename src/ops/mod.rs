//! User-facing operations behind the command-line front end.
//!
//! Each operation takes its collaborators (store, provider, clock) as
//! arguments and returns a report. Rendering lives in [`crate::cli::render`].

pub mod add;
pub mod export;
pub mod headlines;
pub mod theme;

pub use add::{add_entry, AddReport};
pub use export::export_entries;
pub use headlines::{browse_headlines, HeadlineQuery, HeadlineView};
pub use theme::{apply_theme, ThemeChange};
