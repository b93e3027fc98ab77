//! The entry store: an ordered, newest-first list of entries written through
//! to the `moodEntries` slot.

use super::JournalEntry;
use crate::constants::ENTRIES_SLOT;
use crate::errors::{AppResult, StorageError};
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

/// Owns the journal's entries and keeps the persisted slot in sync.
///
/// Every mutation rewrites the whole slot.
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStore> {
    entries: Vec<JournalEntry>,
    backend: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Loads the persisted entries.
    ///
    /// Absent, unreadable or malformed data yields an empty store; startup never
    /// fails because of it.
    pub fn load(backend: S) -> Self {
        let entries = match backend.get(ENTRIES_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<JournalEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring malformed '{}' slot: {}", ENTRIES_SLOT, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read '{}' slot: {}", ENTRIES_SLOT, e);
                Vec::new()
            }
        };

        debug!("Loaded {} entries", entries.len());
        Self { entries, backend }
    }

    /// Inserts `entry` at the front and persists the full list.
    ///
    /// On a failed write the in-memory list is rolled back, so memory and slot
    /// never disagree.
    pub fn append(&mut self, entry: JournalEntry) -> AppResult<()> {
        self.entries.insert(0, entry);
        if let Err(e) = self.persist() {
            self.entries.remove(0);
            return Err(e);
        }
        Ok(())
    }

    /// All entries, newest first.
    pub fn all(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Id of the newest entry, used to keep new ids increasing.
    pub fn last_id(&self) -> Option<i64> {
        self.entries.iter().map(|entry| entry.id).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing store, for other slots that share it.
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn persist(&mut self) -> AppResult<()> {
        let serialized =
            serde_json::to_string(&self.entries).map_err(|source| StorageError::Serialize {
                slot: ENTRIES_SLOT.to_string(),
                source,
            })?;
        self.backend.set(ENTRIES_SLOT, &serialized)?;
        debug!("Persisted {} entries", self.entries.len());
        Ok(())
    }
}
