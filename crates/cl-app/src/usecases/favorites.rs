use std::sync::{PoisonError, RwLock};

use cl_core::storage::{StorageAdapter, StorageKey};
use tracing::{debug, info_span, warn};

/// Scheme ids the citizen has starred, in the order they were added.
///
/// Persisted as a JSON array after every toggle. Independent of the profile:
/// logging out keeps favorites.
pub struct FavoritesSet {
    storage: StorageAdapter,
    ids: RwLock<Vec<String>>,
}

impl FavoritesSet {
    /// Load favorites from storage. Duplicates in a stored array are dropped.
    pub fn new(storage: StorageAdapter) -> Self {
        let ids = Self::read(&storage);
        Self {
            storage,
            ids: RwLock::new(ids),
        }
    }

    fn read(storage: &StorageAdapter) -> Vec<String> {
        let stored: Vec<String> = storage.get_or(StorageKey::SchemeFavorites, Vec::new());
        let mut ids = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Add `scheme_id` if absent, remove it if present.
    ///
    /// Returns whether the id is a favorite afterwards. Membership changes
    /// even if the write fails; the failure is logged.
    pub fn toggle(&self, scheme_id: &str) -> bool {
        let _span = info_span!("usecase.favorites.toggle", scheme_id = %scheme_id).entered();

        let mut ids = self.ids.write().unwrap_or_else(PoisonError::into_inner);
        let now_favorite = match ids.iter().position(|id| id == scheme_id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(scheme_id.to_string());
                true
            }
        };

        if !self.storage.set(StorageKey::SchemeFavorites, &*ids) {
            warn!("Favorites changed for this session only; storage write failed");
        }
        debug!(now_favorite, count = ids.len(), "Toggled favorite");
        now_favorite
    }

    pub fn list(&self) -> Vec<String> {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn contains(&self, scheme_id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|id| id == scheme_id)
    }

    /// Re-read from storage, discarding the in-memory set.
    pub fn reload(&self) -> Vec<String> {
        let fresh = Self::read(&self.storage);
        *self.ids.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        fresh
    }
}
