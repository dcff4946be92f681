use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{Slot, Storage, StorageError};

/// In-memory storage backend.
///
/// Intended for tests/dev; state does not survive the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slots: RwLock<HashMap<&'static str, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(slots.get(slot.key()).cloned())
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(|_| StorageError::LockPoisoned)?;
        slots.insert(slot.key(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(|_| StorageError::LockPoisoned)?;
        slots.remove(slot.key());
        Ok(())
    }
}
