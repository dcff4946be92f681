//! `sugarrush-store` — the catalog & session store.
//!
//! A same-process stand-in for a remote API: it owns the single source of
//! truth for inventory and session state, persisting each to a named durable
//! storage slot as one whole serialized value.

pub mod api;
pub mod in_memory;
pub mod json_file;
pub mod storage;


pub use api::{ApiError, StoreApi};
pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
pub use storage::{Slot, Storage, StorageError};
