//! Key-value persistence for the journal's slots.
//!
//! Every piece of persisted state lives in a named slot holding one serialized
//! text value. Slots are read once at startup and overwritten in full on every
//! change; there is no incremental diffing.

use crate::constants::{SLOT_FILE_EXTENSION, STORE_LOCK_FILE};
use crate::errors::{AppError, AppResult, LockError, StorageError};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A store of named text slots.
pub trait KeyValueStore {
    /// Returns the slot's value, or `None` if it was never written.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replaces the slot's value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// In-memory store, used by tests and by callers that do not want persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: slot `k` lives in `<dir>/k.json`.
///
/// Opening the store takes an exclusive lock on `<dir>/.lock` that is held
/// until the store is dropped, so two processes never interleave writes.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    // Held for the lifetime of the store; the OS lock is released on drop.
    _lock: File,
}

impl FileStore {
    /// Opens (creating if needed) the data directory and locks it.
    ///
    /// # Errors
    ///
    /// - `AppError::Config` if `dir` is not absolute
    /// - `AppError::Io` if the directory cannot be created
    /// - `AppError::Lock` if another process holds the lock
    pub fn open(dir: &Path) -> AppResult<Self> {
        if !dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory path must be absolute: {}",
                dir.display()
            )));
        }

        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to create data directory: {}", e),
                ))
            })?;

            #[cfg(unix)]
            {
                let permissions =
                    fs::Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
                fs::set_permissions(dir, permissions)?;
                debug!("Set 0o700 permissions on data directory");
            }
        }

        let lock_path = dir.join(STORE_LOCK_FILE);
        let lock = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source,
            })?;

        lock.try_lock_exclusive().map_err(|source| {
            if source.kind() == fs2::lock_contended_error().kind() {
                LockError::StoreBusy {
                    path: lock_path.clone(),
                }
            } else {
                LockError::AcquisitionFailed {
                    path: lock_path.clone(),
                    source,
                }
            }
        })?;

        debug!("Acquired data directory lock");
        Ok(FileStore {
            dir: dir.to_path_buf(),
            _lock: lock,
        })
    }

    /// The directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, SLOT_FILE_EXTENSION))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        let path = self.slot_path(key);
        let write_error = |source: io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        // Same directory so the final rename never crosses filesystems.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_error)?;
        tmp.write_all(value.as_bytes()).map_err(write_error)?;
        tmp.as_file().sync_all().map_err(write_error)?;
        tmp.persist(&path)
            .map_err(|e| write_error(e.error))?;

        debug!("Wrote slot '{}' ({} bytes)", key, value.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("moodEntries").unwrap(), None);

        store.set("moodEntries", "[]").unwrap();
        assert_eq!(store.get("moodEntries").unwrap(), Some("[]".to_string()));

        store.set("moodEntries", "[1]").unwrap();
        assert_eq!(store.get("moodEntries").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let mut store = MemoryStore::new();
        for key in ["", "../escape", "a/b", "dot.ted"] {
            let result = store.set(key, "x");
            assert!(
                matches!(result, Err(AppError::Storage(StorageError::InvalidKey(_)))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_file_store_creates_directory_and_persists() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("data");

        {
            let mut store = FileStore::open(&dir).unwrap();
            assert!(dir.is_dir());
            assert_eq!(store.get("darkMode").unwrap(), None);
            store.set("darkMode", "true").unwrap();
        }

        let contents = fs::read_to_string(dir.join("darkMode.json")).unwrap();
        assert_eq!(contents, "true");

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_file_store_overwrites_in_full() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::open(temp.path()).unwrap();

        store.set("moodEntries", "a much longer first value").unwrap();
        store.set("moodEntries", "short").unwrap();

        assert_eq!(store.get("moodEntries").unwrap(), Some("short".to_string()));
    }

    #[test]
    fn test_file_store_rejects_relative_path() {
        let result = FileStore::open(Path::new("relative/data"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_second_store_on_same_directory_is_busy() {
        let temp = tempdir().unwrap();
        let _first = FileStore::open(temp.path()).unwrap();

        let second = FileStore::open(temp.path());
        assert!(matches!(
            second,
            Err(AppError::Lock(LockError::StoreBusy { .. }))
        ));
    }
}
