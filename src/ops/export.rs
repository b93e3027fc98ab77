//! Export entries to a CSV file.

use crate::errors::AppResult;
use crate::export::CsvDownload;
use crate::journal::{JournalEntry, Mood};
use crate::views::filter_by_mood;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the (optionally filtered) entries as CSV.
///
/// The file goes to `output` when given, otherwise to the download file name
/// inside `default_dir`. Returns the path written.
pub fn export_entries(
    entries: &[JournalEntry],
    filter: Option<Mood>,
    output: Option<&Path>,
    default_dir: &Path,
) -> AppResult<PathBuf> {
    let selected = filter_by_mood(entries, filter);
    let download = CsvDownload::new(&selected);

    let path = match output {
        Some(path) => {
            download.save_as(path)?;
            path.to_path_buf()
        }
        None => download.save_in(default_dir)?,
    };

    info!("Exported {} entries to {:?}", selected.len(), path);
    Ok(path)
}
