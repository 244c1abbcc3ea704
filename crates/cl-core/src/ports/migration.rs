use crate::storage::StorageAdapter;

/// One step of the persisted-data migration chain.
///
/// Steps are looked up by [`from_version`](Self::from_version) and applied
/// until the stored version reaches
/// [`CURRENT_STORAGE_VERSION`](crate::storage::CURRENT_STORAGE_VERSION).
pub trait StorageMigrationPort: Send + Sync {
    fn from_version(&self) -> &str;
    fn to_version(&self) -> &str;
    fn migrate(&self, storage: &StorageAdapter) -> anyhow::Result<()>;
}
