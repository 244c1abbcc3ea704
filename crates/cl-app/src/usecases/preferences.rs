use std::sync::Arc;

use chrono::{DateTime, Utc};
use cl_core::ports::ClockPort;
use cl_core::preferences::{LanguageCode, Theme};
use cl_core::storage::{StorageAdapter, StorageKey};
use tracing::{debug, info, warn};

/// Small per-device settings stored next to the profile.
///
/// Each getter falls back to its default when the slot is empty or holds
/// something unreadable. Setters report whether the value was persisted.
pub struct Preferences {
    storage: StorageAdapter,
    clock: Arc<dyn ClockPort>,
}

impl Preferences {
    pub fn new(storage: StorageAdapter, clock: Arc<dyn ClockPort>) -> Self {
        Self { storage, clock }
    }

    pub fn theme(&self) -> Theme {
        self.storage
            .get_or(StorageKey::ThemePreference, Theme::default())
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        debug!(?theme, "Setting theme");
        self.storage.set(StorageKey::ThemePreference, &theme)
    }

    pub fn language(&self) -> LanguageCode {
        self.storage
            .get_or(StorageKey::LanguagePreference, LanguageCode::default())
    }

    pub fn set_language(&self, language: LanguageCode) -> bool {
        info!(language = %language, "Setting language");
        self.storage.set(StorageKey::LanguagePreference, &language)
    }

    pub fn is_splash_shown(&self) -> bool {
        self.storage.get_or(StorageKey::SplashShown, false)
    }

    pub fn mark_splash_shown(&self) -> bool {
        self.storage.set(StorageKey::SplashShown, &true)
    }

    /// When the portal was last opened, before the current start.
    pub fn last_visit(&self) -> Option<DateTime<Utc>> {
        self.storage.get(StorageKey::LastVisit)
    }

    /// Record "now" as the last visit and return it.
    pub fn touch_last_visit(&self) -> DateTime<Utc> {
        let now = self.clock.now();
        if !self.storage.set(StorageKey::LastVisit, &now) {
            warn!("Last visit not persisted");
        }
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{full_storage, storage, FixedClock};
    use mockall::mock;

    fn prefs() -> (StorageAdapter, Preferences) {
        let (_, store) = storage();
        let prefs = Preferences::new(store.clone(), FixedClock::at(2025, 1, 15));
        (store, prefs)
    }

    #[test]
    fn test_defaults_when_nothing_stored() {
        let (_, prefs) = prefs();

        assert_eq!(prefs.theme(), Theme::System);
        assert_eq!(prefs.language(), LanguageCode::En);
        assert!(!prefs.is_splash_shown());
        assert_eq!(prefs.last_visit(), None);
    }

    #[test]
    fn test_values_are_stored_as_plain_json() {
        let (store, prefs) = prefs();

        prefs.set_theme(Theme::Dark);
        prefs.set_language(LanguageCode::Ta);
        prefs.mark_splash_shown();

        assert_eq!(store.get::<String>(StorageKey::ThemePreference).as_deref(), Some("dark"));
        assert_eq!(store.get::<String>(StorageKey::LanguagePreference).as_deref(), Some("ta"));
        assert_eq!(store.get::<bool>(StorageKey::SplashShown), Some(true));
        assert_eq!(prefs.language(), LanguageCode::Ta);
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let (store, prefs) = prefs();
        store.set(StorageKey::LanguagePreference, "fr");

        assert_eq!(prefs.language(), LanguageCode::En);
    }

    #[test]
    fn test_touch_last_visit_stores_iso_timestamp() {
        let (store, prefs) = prefs();

        let stamped = prefs.touch_last_visit();

        assert_eq!(prefs.last_visit(), Some(stamped));
        assert_eq!(
            store.get::<String>(StorageKey::LastVisit).as_deref(),
            Some("2025-01-15T09:30:00Z")
        );
    }

    mock! {
        pub Clock {}

        impl ClockPort for Clock {
            fn now(&self) -> DateTime<Utc>;
        }
    }

    #[test]
    fn test_touch_last_visit_still_returns_now_when_storage_is_full() {
        let clock = FixedClock::at(2025, 1, 15);
        let prefs = Preferences::new(full_storage(), clock.clone());

        assert_eq!(prefs.touch_last_visit(), clock.0);
        assert_eq!(prefs.last_visit(), None);
    }

    #[test]
    fn test_reading_preferences_never_asks_the_clock() {
        let (_, store) = storage();
        let mut clock = MockClock::new();
        clock.expect_now().never();
        let prefs = Preferences::new(store, Arc::new(clock));

        prefs.theme();
        prefs.last_visit();
        prefs.set_theme(Theme::Light);
    }
}
