mod file;
mod memory;
pub mod migration;

pub use file::FileKeyValueStore;
pub use memory::{MemoryStoreHandle, SharedMemoryStore};
pub use migration::{MigrationOutcome, StorageMigrator};
