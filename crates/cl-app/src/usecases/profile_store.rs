//! Session profile store
//! 会话级用户档案存储

use std::sync::{PoisonError, RwLock};

use cl_core::profile::Profile;
use cl_core::storage::{StorageAdapter, StorageKey};
use tracing::{info, info_span, warn};

/// Holds the single citizen profile for the session.
///
/// ## Behavior / 行为
/// - `save` and `clear` are the only writers; everyone else gets clones
/// - `load` serves the cached copy, reading through storage on first use
/// - No partial updates: callers always hand over a complete [`Profile`]
pub struct ProfileStore {
    storage: StorageAdapter,
    cache: RwLock<Option<Profile>>,
}

impl ProfileStore {
    pub fn new(storage: StorageAdapter) -> Self {
        Self {
            storage,
            cache: RwLock::new(None),
        }
    }

    /// Persist `profile` and make it the session's profile.
    ///
    /// The session copy is updated even if persisting fails; the return
    /// value reports whether the write reached storage.
    pub fn save(&self, profile: Profile) -> bool {
        let _span = info_span!("usecase.profile_store.save").entered();

        let persisted = self.storage.set(StorageKey::UserProfile, &profile);
        if persisted {
            info!(district = %profile.district, "Profile saved");
        } else {
            warn!("Profile kept for this session only; storage write failed");
        }

        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(profile);
        persisted
    }

    /// The session profile, or `None` if the citizen has not registered.
    pub fn load(&self) -> Option<Profile> {
        if let Some(profile) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Some(profile.clone());
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if cache.is_none() {
            *cache = self.storage.get(StorageKey::UserProfile);
        }
        cache.clone()
    }

    /// Drop the cached copy and read storage again.
    ///
    /// For consumers reacting to a change made in another tab.
    pub fn reload(&self) -> Option<Profile> {
        let fresh: Option<Profile> = self.storage.get(StorageKey::UserProfile);
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = fresh.clone();
        fresh
    }

    /// Forget the profile (logout).
    pub fn clear(&self) -> bool {
        let _span = info_span!("usecase.profile_store.clear").entered();

        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
        let removed = self.storage.remove(StorageKey::UserProfile);
        info!(removed, "Profile cleared");
        removed
    }

    pub fn is_registered(&self) -> bool {
        self.load().is_some_and(|p| p.is_registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{profile, storage};

    #[test]
    fn test_load_without_profile_is_none() {
        let (_, store) = storage();
        let profiles = ProfileStore::new(store);

        assert_eq!(profiles.load(), None);
        assert!(!profiles.is_registered());
    }

    #[test]
    fn test_save_then_load_from_fresh_store() {
        let (_, store) = storage();
        ProfileStore::new(store.clone()).save(profile());

        let other_session = ProfileStore::new(store);
        assert_eq!(other_session.load(), Some(profile()));
        assert!(other_session.is_registered());
    }

    #[test]
    fn test_load_serves_cache_after_first_read() {
        let (_, store) = storage();
        let profiles = ProfileStore::new(store.clone());
        profiles.save(profile());

        // Another writer replaces the stored record behind our back.
        let mut changed = profile();
        changed.name = "Someone Else".to_string();
        store.set(StorageKey::UserProfile, &changed);

        assert_eq!(profiles.load().map(|p| p.name), Some(profile().name));
        assert_eq!(profiles.reload().map(|p| p.name), Some(changed.name));
    }

    #[test]
    fn test_clear_removes_record_and_cache() {
        let (_, store) = storage();
        let profiles = ProfileStore::new(store.clone());
        profiles.save(profile());

        assert!(profiles.clear());

        assert_eq!(profiles.load(), None);
        assert!(!store.contains(StorageKey::UserProfile));
    }

    #[test]
    fn test_unregistered_record_does_not_count() {
        let (_, store) = storage();
        let mut stale = profile();
        stale.is_registered = false;
        store.set(StorageKey::UserProfile, &stale);

        assert!(!ProfileStore::new(store).is_registered());
    }
}
