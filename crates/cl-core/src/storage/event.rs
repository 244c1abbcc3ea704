use serde_json::Value;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::warn;

use crate::ports::{RawStorageEvent, StoreHandleId};

use super::keys::StorageKey;

/// A namespace write performed by another handle (another tab).
///
/// Values are decoded as untyped JSON; a value that does not parse shows up
/// as `None`, the same as a removal.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChange {
    pub key: StorageKey,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// Synchronous, non-blocking view over a store's change feed.
///
/// Purely informational: nothing here reconciles in-memory caches with the
/// external write. Consumers decide whether to reload.
///
/// A listener that falls behind the feed loses events. That is remembered
/// until [`StorageListener::take_lagged`] is called, so consumers can fall
/// back to reloading everything they cache.
pub struct StorageListener {
    receiver: broadcast::Receiver<RawStorageEvent>,
    own_handle: StoreHandleId,
    lagged: bool,
}

impl StorageListener {
    pub(crate) fn new(
        receiver: broadcast::Receiver<RawStorageEvent>,
        own_handle: StoreHandleId,
    ) -> Self {
        Self {
            receiver,
            own_handle,
            lagged: false,
        }
    }

    /// Next pending external namespace change, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<StorageChange> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if let Some(change) = self.accept(event) {
                        return Some(change);
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Storage change listener lagged; events dropped");
                    self.lagged = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Every pending external namespace change, oldest first.
    pub fn drain(&mut self) -> Vec<StorageChange> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Whether events were dropped since the last call. Clears the flag.
    pub fn take_lagged(&mut self) -> bool {
        std::mem::take(&mut self.lagged)
    }

    fn accept(&self, event: RawStorageEvent) -> Option<StorageChange> {
        if event.origin == self.own_handle {
            return None;
        }
        let key = StorageKey::from_physical(&event.key)?;

        Some(StorageChange {
            key,
            old_value: decode(key, event.old_value.as_deref()),
            new_value: decode(key, event.new_value.as_deref()),
        })
    }
}

fn decode(key: StorageKey, raw: Option<&str>) -> Option<Value> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = %key, error = %e, "Ignoring unparsable value in storage change");
            None
        }
    }
}
