//! In-memory key-value store shared between handles
//!
//! One [`SharedMemoryStore`] stands for the browser-wide local store; each
//! [`MemoryStoreHandle`] stands for one open tab. All handles see the same
//! items, and every write is broadcast to all of them tagged with the
//! writer's [`StoreHandleId`]. Last write wins; there is no locking beyond
//! the map's own mutex.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use cl_core::ports::{KeyValueStorePort, RawStorageEvent, StorageError, StoreHandleId};
use tokio::sync::broadcast;
use tracing::debug;

/// Capacity of the change feed. Slow listeners lose the oldest events.
const EVENT_CAPACITY: usize = 64;

struct Shared {
    items: Mutex<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    events: broadcast::Sender<RawStorageEvent>,
}

#[derive(Clone)]
pub struct SharedMemoryStore {
    shared: Arc<Shared>,
}

impl SharedMemoryStore {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Store that rejects writes once keys plus values exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self::build(Some(quota_bytes))
    }

    fn build(quota_bytes: Option<usize>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                items: Mutex::new(BTreeMap::new()),
                quota_bytes,
                events,
            }),
        }
    }

    /// Open a new handle (tab) onto this store.
    pub fn open_handle(&self) -> MemoryStoreHandle {
        let handle = MemoryStoreHandle {
            shared: self.shared.clone(),
            id: StoreHandleId::new(),
        };
        debug!(handle = %handle.id, "Opened memory store handle");
        handle
    }

    /// Bytes currently counted against the quota.
    pub fn used_bytes(&self) -> usize {
        self.shared
            .lock()
            .map(|items| used_bytes(&items))
            .unwrap_or(0)
    }
}

impl Default for SharedMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Shared {
    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Backend("memory store mutex poisoned".to_string()))
    }

    fn publish(&self, event: RawStorageEvent) {
        // No subscribers is the normal single-tab case.
        let _ = self.events.send(event);
    }
}

fn entry_bytes(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

fn used_bytes(items: &BTreeMap<String, String>) -> usize {
    items.iter().map(|(k, v)| entry_bytes(k, v)).sum()
}

pub struct MemoryStoreHandle {
    shared: Arc<Shared>,
    id: StoreHandleId,
}

impl KeyValueStorePort for MemoryStoreHandle {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.shared.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let old_value = {
            let mut items = self.shared.lock()?;

            if let Some(quota) = self.shared.quota_bytes {
                let replaced = items.get(key).map_or(0, |old| entry_bytes(key, old));
                let available = quota.saturating_sub(used_bytes(&items) - replaced);
                let requested = entry_bytes(key, value);
                if requested > available {
                    return Err(StorageError::QuotaExceeded {
                        key: key.to_string(),
                        requested,
                        available,
                    });
                }
            }

            items.insert(key.to_string(), value.to_string())
        };

        self.shared.publish(RawStorageEvent {
            key: key.to_string(),
            old_value,
            new_value: Some(value.to_string()),
            origin: self.id,
        });
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let removed = self.shared.lock()?.remove(key);

        if let Some(old_value) = removed {
            self.shared.publish(RawStorageEvent {
                key: key.to_string(),
                old_value: Some(old_value),
                new_value: None,
                origin: self.id,
            });
        }
        Ok(())
    }

    fn handle_id(&self) -> StoreHandleId {
        self.id
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<RawStorageEvent>> {
        Some(self.shared.events.subscribe())
    }
}
