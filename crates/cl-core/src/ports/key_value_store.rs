//! Key-value store port
//!
//! Models a browser-style local store: flat string keys, string values,
//! synchronous access. Several handles may share one backing store (one per
//! open tab); each handle has its own [`StoreHandleId`] so change events can
//! tell local writes from external ones.

use std::fmt;

use tokio::sync::broadcast;
use uuid::Uuid;

use super::errors::StorageError;

/// Identity of one handle onto a backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreHandleId(Uuid);

impl StoreHandleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StoreHandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoreHandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A write observed on the backing store, before any namespace filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawStorageEvent {
    pub key: String,
    pub old_value: Option<String>,
    /// `None` when the key was removed.
    pub new_value: Option<String>,
    /// Handle that performed the write.
    pub origin: StoreHandleId,
}

pub trait KeyValueStorePort: Send + Sync {
    /// Raw value under `key`; `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn handle_id(&self) -> StoreHandleId;

    /// Change feed shared by every handle on the same backing store.
    ///
    /// Backends that cannot observe other writers return `None`.
    fn subscribe(&self) -> Option<broadcast::Receiver<RawStorageEvent>> {
        None
    }
}
