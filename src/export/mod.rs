//! CSV export of journal entries.
//!
//! Columns are joined with plain commas and no quoting. A note containing a
//! comma, quote or line break therefore shifts or splits its row; this matches
//! the established export format and is a known limitation.

use crate::constants::{CSV_FILE_NAME, CSV_HEADER, CSV_MIME_TYPE, CSV_NOT_AVAILABLE};
use crate::errors::AppResult;
use crate::journal::JournalEntry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A rendered export ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

impl CsvDownload {
    pub fn new(entries: &[JournalEntry]) -> Self {
        CsvDownload {
            file_name: CSV_FILE_NAME,
            mime_type: CSV_MIME_TYPE,
            content: to_csv(entries),
        }
    }

    /// Writes the content to `dir/<file_name>` and returns the path.
    pub fn save_in(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(self.file_name);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Writes the content to `path`.
    pub fn save_as(&self, path: &Path) -> AppResult<()> {
        fs::write(path, &self.content)?;
        info!("Exported {} bytes of CSV", self.content.len());
        Ok(())
    }
}

fn csv_row(entry: &JournalEntry) -> String {
    let (condition, temperature, location) = match &entry.weather {
        Some(weather) => (
            weather.condition.to_string(),
            format!("{}°C", weather.temperature),
            weather.location_name.clone(),
        ),
        None => (
            CSV_NOT_AVAILABLE.to_string(),
            CSV_NOT_AVAILABLE.to_string(),
            CSV_NOT_AVAILABLE.to_string(),
        ),
    };

    [
        entry.formatted_date.as_str(),
        entry.mood.id(),
        entry.note.as_str(),
        condition.as_str(),
        temperature.as_str(),
        location.as_str(),
    ]
    .join(",")
}

/// Renders the header plus one row per entry, joined by `\n`, no trailing newline.
pub fn to_csv(entries: &[JournalEntry]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(entries.iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}
