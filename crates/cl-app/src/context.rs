//! Session context
//! 会话上下文
//!
//! [`AppContext`] owns every session-scoped store and hands out use cases.
//! It replaces ambient global state: whoever needs the profile is given the
//! context (or the [`ProfileStore`] it exposes) explicitly.

use std::sync::Arc;

use cl_core::scheme::{default_catalog, Scheme};
use cl_core::storage::{StorageAdapter, StorageKey, StorageListener};
use tracing::{info, info_span, warn};

use crate::deps::AppDeps;
use crate::usecases::{
    BrowseSchemes, EducationTracker, FavoritesSet, LegalCounselChat, Preferences, ProfileStore,
    RegistrationWizard,
};

pub struct AppContext {
    storage: StorageAdapter,
    catalog: Arc<[Scheme]>,
    profiles: Arc<ProfileStore>,
    favorites: Arc<FavoritesSet>,
    preferences: Preferences,
    counsel_chat: LegalCounselChat,
    education: EducationTracker,
}

impl AppContext {
    pub fn new(deps: AppDeps) -> Self {
        let storage = StorageAdapter::new(deps.store);

        Self {
            catalog: default_catalog().into(),
            profiles: Arc::new(ProfileStore::new(storage.clone())),
            favorites: Arc::new(FavoritesSet::new(storage.clone())),
            preferences: Preferences::new(storage.clone(), deps.clock.clone()),
            counsel_chat: LegalCounselChat::new(storage.clone(), deps.counsel, deps.clock.clone()),
            education: EducationTracker::new(storage.clone(), deps.clock),
            storage,
        }
    }

    pub fn storage(&self) -> &StorageAdapter {
        &self.storage
    }

    pub fn catalog(&self) -> &[Scheme] {
        &self.catalog
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn counsel_chat(&self) -> &LegalCounselChat {
        &self.counsel_chat
    }

    pub fn education(&self) -> &EducationTracker {
        &self.education
    }

    pub fn browse_schemes(&self) -> BrowseSchemes {
        BrowseSchemes::new(
            self.profiles.clone(),
            self.favorites.clone(),
            self.catalog.clone(),
        )
    }

    /// A fresh registration flow writing into this session's profile store.
    pub fn registration(&self) -> RegistrationWizard {
        RegistrationWizard::new(self.profiles.clone())
    }

    /// Forget the citizen's profile. Favorites and preferences stay.
    pub fn logout(&self) -> bool {
        self.profiles.clear()
    }

    /// Remove every namespace key and reset the in-memory caches.
    pub fn clear_all_data(&self) -> bool {
        let _span = info_span!("usecase.context.clear_all_data").entered();

        let cleared = self.storage.clear_namespace();
        if !cleared {
            warn!("Some namespace keys could not be removed");
        }

        self.profiles.reload();
        self.favorites.reload();
        self.counsel_chat.reload();
        info!(cleared, "All portal data cleared");
        cleared
    }

    /// Change feed for writes made through other handles, if the backing
    /// store has one.
    pub fn subscribe_changes(&self) -> Option<StorageListener> {
        self.storage.subscribe()
    }

    /// Apply pending external writes to the caches that hold a copy.
    ///
    /// Returns the distinct keys that changed, in the order first seen.
    /// Keys without a cache (preferences, education progress) need no work
    /// because they are read through on every access. When the listener
    /// fell behind and lost events, every cache is reloaded and its key
    /// reported, since the dropped writes are unknown.
    pub fn sync_external_changes(&self, listener: &mut StorageListener) -> Vec<StorageKey> {
        let mut changed: Vec<StorageKey> = Vec::new();
        for change in listener.drain() {
            if !changed.contains(&change.key) {
                changed.push(change.key);
            }
        }

        if listener.take_lagged() {
            warn!("Missed changes from another tab; reloading all caches");
            for key in CACHED_KEYS {
                if !changed.contains(&key) {
                    changed.push(key);
                }
            }
        }

        for key in &changed {
            match key {
                StorageKey::UserProfile => {
                    self.profiles.reload();
                }
                StorageKey::SchemeFavorites => {
                    self.favorites.reload();
                }
                StorageKey::ChatHistory => self.counsel_chat.reload(),
                _ => {}
            }
        }

        if !changed.is_empty() {
            info!(keys = ?changed, "Applied changes from another tab");
        }
        changed
    }
}

/// Keys whose values are held in memory by this context.
const CACHED_KEYS: [StorageKey; 3] = [
    StorageKey::UserProfile,
    StorageKey::SchemeFavorites,
    StorageKey::ChatHistory,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{profile, FixedClock};
    use crate::usecases::{SchemeBrowse, SchemeQuery};
    use cl_core::profile::Profile;
    use cl_infra::{CannedCounsel, SharedMemoryStore};

    fn context(shared: &SharedMemoryStore) -> AppContext {
        AppContext::new(AppDeps {
            store: Arc::new(shared.open_handle()),
            counsel: Arc::new(CannedCounsel::new()),
            clock: FixedClock::at(2025, 1, 10),
        })
    }

    #[test]
    fn test_logout_keeps_favorites() {
        let shared = SharedMemoryStore::new();
        let ctx = context(&shared);
        ctx.profiles().save(profile());
        ctx.favorites().toggle("2");

        assert!(ctx.logout());

        assert!(!ctx.profiles().is_registered());
        assert_eq!(ctx.favorites().list(), vec!["2".to_string()]);
        assert!(matches!(
            ctx.browse_schemes().execute(&SchemeQuery::default()),
            SchemeBrowse::RegistrationRequired { .. }
        ));
    }

    #[test]
    fn test_clear_all_data_resets_caches() {
        let shared = SharedMemoryStore::new();
        let ctx = context(&shared);
        ctx.profiles().save(profile());
        ctx.favorites().toggle("2");

        assert!(ctx.clear_all_data());

        assert_eq!(ctx.profiles().load(), None);
        assert!(ctx.favorites().list().is_empty());
        assert_eq!(shared.used_bytes(), 0);
    }

    #[test]
    fn test_sync_reloads_profile_written_by_other_tab() {
        let shared = SharedMemoryStore::new();
        let tab_a = context(&shared);
        let tab_b = context(&shared);
        let mut feed = tab_a.subscribe_changes().unwrap();
        assert_eq!(tab_a.profiles().load(), None);

        tab_b.profiles().save(profile());
        tab_b.favorites().toggle("4");
        tab_b.favorites().toggle("5");

        let changed = tab_a.sync_external_changes(&mut feed);

        assert_eq!(changed, vec![StorageKey::UserProfile, StorageKey::SchemeFavorites]);
        assert_eq!(tab_a.profiles().load(), Some(profile()));
        assert_eq!(tab_a.favorites().list(), vec!["4".to_string(), "5".to_string()]);
    }

    #[test]
    fn test_sync_after_missed_changes_reloads_everything() {
        let shared = SharedMemoryStore::new();
        let tab_a = context(&shared);
        let tab_b = context(&shared);
        tab_a.profiles().save(profile());
        let mut feed = tab_a.subscribe_changes().unwrap();

        tab_b.profiles().save(Profile {
            name: "Other Citizen".to_string(),
            ..profile()
        });
        for _ in 0..70 {
            tab_b.favorites().toggle("3");
        }

        let changed = tab_a.sync_external_changes(&mut feed);

        assert!(changed.contains(&StorageKey::UserProfile));
        assert!(changed.contains(&StorageKey::ChatHistory));
        assert_eq!(tab_a.profiles().load().unwrap().name, "Other Citizen");
        assert!(tab_a.favorites().list().is_empty());
        assert!(tab_a.sync_external_changes(&mut feed).is_empty());
    }

    #[test]
    fn test_own_writes_are_not_reported() {
        let shared = SharedMemoryStore::new();
        let ctx = context(&shared);
        let mut feed = ctx.subscribe_changes().unwrap();

        ctx.profiles().save(profile());

        assert!(ctx.sync_external_changes(&mut feed).is_empty());
    }
}
