use std::fmt;

/// Logical storage slot.
///
/// Every persisted value lives under exactly one of these keys; nothing else
/// in the backing store belongs to the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    UserProfile,
    SplashShown,
    ThemePreference,
    LanguagePreference,
    ChatHistory,
    SchemeFavorites,
    EducationProgress,
    LastVisit,
    StorageVersion,
}

impl StorageKey {
    pub const ALL: [StorageKey; 9] = [
        StorageKey::UserProfile,
        StorageKey::SplashShown,
        StorageKey::ThemePreference,
        StorageKey::LanguagePreference,
        StorageKey::ChatHistory,
        StorageKey::SchemeFavorites,
        StorageKey::EducationProgress,
        StorageKey::LastVisit,
        StorageKey::StorageVersion,
    ];

    /// Physical key in the backing store.
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageKey::UserProfile => "civilink-user",
            StorageKey::SplashShown => "civilink-splash-shown",
            StorageKey::ThemePreference => "civilink-theme",
            StorageKey::LanguagePreference => "civilink-language",
            StorageKey::ChatHistory => "civilink-chat-history",
            StorageKey::SchemeFavorites => "civilink-scheme-favorites",
            StorageKey::EducationProgress => "civilink-education-progress",
            StorageKey::LastVisit => "civilink-last-visit",
            StorageKey::StorageVersion => "civilink-storage-version",
        }
    }

    /// Reverse lookup; `None` for keys outside the namespace.
    pub fn from_physical(key: &str) -> Option<StorageKey> {
        StorageKey::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
