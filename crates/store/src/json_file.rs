use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::{Slot, Storage, StorageError};

/// File-backed storage: one JSON object on disk mapping slot keys to their
/// serialized values, rewritten whole on every mutation.
///
/// This is the durable stand-in for browser local storage. Every operation
/// goes back to disk, so state survives dropping the store and reopening the
/// same path. A missing or unparseable file is treated as empty (defensive
/// default, logged at `warn`); any other IO failure surfaces as
/// [`StorageError`].
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(slots) => Ok(slots),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unparseable storage file, treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    fn persist(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(slots)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(slot.key()).cloned())
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        let mut slots = self.load()?;
        slots.insert(slot.key().to_string(), value.to_string());
        self.persist(&slots)
    }

    fn remove(&self, slot: Slot) -> Result<(), StorageError> {
        let mut slots = self.load()?;
        if slots.remove(slot.key()).is_some() {
            self.persist(&slots)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> JsonFileStorage {
        JsonFileStorage::new(dir.path().join("store.json"))
    }

    #[test]
    fn read_before_any_write_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.read(Slot::Catalog).unwrap().is_none());
    }

    #[test]
    fn values_survive_reopening_the_same_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let storage = JsonFileStorage::new(&path);
        storage.write(Slot::Token, "mock-jwt-admin-token").unwrap();
        drop(storage);

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(
            reopened.read(Slot::Token).unwrap().as_deref(),
            Some("mock-jwt-admin-token")
        );
    }

    #[test]
    fn remove_drops_only_the_named_slot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.write(Slot::Identity, "{\"id\":\"x\"}").unwrap();
        storage.write(Slot::Token, "t").unwrap();

        storage.remove(Slot::Identity).unwrap();
        assert!(storage.read(Slot::Identity).unwrap().is_none());
        assert_eq!(storage.read(Slot::Token).unwrap().as_deref(), Some("t"));
    }

    #[test]
    fn remove_of_an_absent_slot_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.remove(Slot::Token).unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json {{{").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(storage.read(Slot::Catalog).unwrap().is_none());

        // A write recovers the file.
        storage.write(Slot::Token, "t").unwrap();
        assert_eq!(storage.read(Slot::Token).unwrap().as_deref(), Some("t"));
    }

    #[test]
    fn unreadable_path_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        // A directory where the file should be: reads fail, but not with
        // NotFound, so the failure must surface instead of reading as empty.
        fs::create_dir_all(&path).unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.read(Slot::Catalog),
            Err(StorageError::Io(_))
        ));
        assert!(matches!(
            storage.write(Slot::Token, "t"),
            Err(StorageError::Io(_))
        ));
        assert!(matches!(
            storage.remove(Slot::Token),
            Err(StorageError::Io(_))
        ));
    }

    #[test]
    fn opening_a_store_over_an_unreadable_path_fails_rather_than_reseeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::create_dir_all(&path).unwrap();

        let err = crate::StoreApi::open(JsonFileStorage::new(&path)).unwrap_err();
        assert!(matches!(
            err,
            crate::ApiError::Storage(StorageError::Io(_))
        ));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/store.json");
        let storage = JsonFileStorage::new(&path);
        storage.write(Slot::Token, "t").unwrap();
        assert!(path.exists());
    }
}
