//! Durable storage slots: whole-value read/replace, no transactions.

use thiserror::Error;

/// The named slots the store persists to.
///
/// Slot keys are stable wire names; a catalog written by an earlier build of
/// the demo is picked up unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Serialized `Vec<Product>`.
    Catalog,
    /// Serialized `Identity`, absent when no session is active.
    Identity,
    /// Opaque session token, present iff the identity slot is.
    Token,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::Catalog => "sugar_rush_sweets_v2",
            Slot::Identity => "sugar_rush_user",
            Slot::Token => "sugar_rush_token",
        }
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// Storage backend failure.
///
/// Deterministic domain failures never show up here; this is IO-level only.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// A durable key-value store holding one serialized value per slot.
///
/// Each operation reads or replaces the whole slot value. The store does not
/// defend against independent processes mutating the same slots concurrently;
/// the demo assumes a single logical thread of control.
pub trait Storage {
    /// Read a slot. `Ok(None)` when the slot has never been written or was
    /// removed.
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError>;

    /// Replace a slot's value.
    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Idempotent; removing an absent slot is not an error.
    fn remove(&self, slot: Slot) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, value: &str) -> Result<(), StorageError> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: Slot) -> Result<(), StorageError> {
        (**self).remove(slot)
    }
}
