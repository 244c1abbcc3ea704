//! Namespaced local storage
//!
//! [`StorageKey`] is the closed set of slots the portal persists.
//! [`StorageAdapter`] layers JSON encoding and failure recovery over a
//! [`KeyValueStorePort`](crate::ports::KeyValueStorePort) backend.

mod adapter;
mod event;
mod keys;

pub use adapter::StorageAdapter;
pub use event::{StorageChange, StorageListener};
pub use keys::StorageKey;

/// Schema version written under [`StorageKey::StorageVersion`].
pub const CURRENT_STORAGE_VERSION: &str = "1.0.0";
