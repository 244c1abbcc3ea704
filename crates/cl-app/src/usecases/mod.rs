//! Business logic use cases
//!
//! Profile and favorites are session-scoped stores with a single writer each;
//! everything else reads through them.

pub mod browse_schemes;
pub mod counsel_chat;
pub mod education_progress;
pub mod favorites;
pub mod preferences;
pub mod profile_store;
pub mod registration;

pub use browse_schemes::{BrowseSchemes, ListedScheme, SchemeBrowse, SchemeListing, SchemeQuery};
pub use counsel_chat::LegalCounselChat;
pub use education_progress::EducationTracker;
pub use favorites::FavoritesSet;
pub use preferences::Preferences;
pub use profile_store::ProfileStore;
pub use registration::{RegistrationError, RegistrationForm, RegistrationStep, RegistrationWizard};

#[cfg(test)]
pub(crate) mod test_support;
