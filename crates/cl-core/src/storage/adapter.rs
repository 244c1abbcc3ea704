use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::ports::KeyValueStorePort;

use super::event::StorageListener;
use super::keys::StorageKey;

/// Typed, failure-absorbing access to the portal's storage namespace.
///
/// Values are stored as JSON text. Backend and (de)serialization failures
/// are logged and turned into `false` / `None` / the caller's default; they
/// never propagate to the caller.
///
/// A missing key is not a failure: it is the "nothing stored yet" state and
/// is distinct from a stored empty value.
#[derive(Clone)]
pub struct StorageAdapter {
    store: Arc<dyn KeyValueStorePort>,
}

impl StorageAdapter {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Serialize `value` and write it under `key`.
    pub fn set<T>(&self, key: StorageKey, value: &T) -> bool
    where
        T: Serialize + ?Sized,
    {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to serialize storage value");
                return false;
            }
        };

        match self.store.set_item(key.as_str(), &encoded) {
            Ok(()) => {
                debug!(key = %key, bytes = encoded.len(), "Stored value");
                true
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to write storage value");
                false
            }
        }
    }

    /// Read and deserialize the value under `key`.
    ///
    /// `None` when the key is absent or its content cannot be decoded as `T`.
    pub fn get<T>(&self, key: StorageKey) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let raw = match self.store.get_item(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!(key = %key, error = %e, "Failed to read storage value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!(key = %key, error = %e, "Failed to deserialize storage value");
                None
            }
        }
    }

    /// Like [`get`](Self::get), falling back to `default`.
    pub fn get_or<T>(&self, key: StorageKey, default: T) -> T
    where
        T: DeserializeOwned,
    {
        self.get(key).unwrap_or(default)
    }

    /// Whether anything is stored under `key`, decodable or not.
    pub fn contains(&self, key: StorageKey) -> bool {
        match self.store.get_item(key.as_str()) {
            Ok(raw) => raw.is_some(),
            Err(e) => {
                error!(key = %key, error = %e, "Failed to probe storage key");
                false
            }
        }
    }

    pub fn remove(&self, key: StorageKey) -> bool {
        match self.store.remove_item(key.as_str()) {
            Ok(()) => {
                debug!(key = %key, "Removed value");
                true
            }
            Err(e) => {
                error!(key = %key, error = %e, "Failed to remove storage value");
                false
            }
        }
    }

    /// Remove every namespace key. Keys outside [`StorageKey::ALL`] are left
    /// alone. Every key is attempted even after a failure.
    pub fn clear_namespace(&self) -> bool {
        let mut cleared = true;
        for key in StorageKey::ALL {
            if let Err(e) = self.store.remove_item(key.as_str()) {
                error!(key = %key, error = %e, "Failed to clear storage key");
                cleared = false;
            }
        }
        cleared
    }

    /// Advisory feed of namespace writes made by other handles on the same
    /// backing store. `None` if the backend cannot observe other writers.
    pub fn subscribe(&self) -> Option<StorageListener> {
        let receiver = self.store.subscribe()?;
        Some(StorageListener::new(receiver, self.store.handle_id()))
    }
}
