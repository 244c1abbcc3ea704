pub mod counsel;
pub mod fs;
pub mod storage;
pub mod time;

pub use counsel::CannedCounsel;
pub use storage::{FileKeyValueStore, MemoryStoreHandle, SharedMemoryStore, StorageMigrator};
pub use time::SystemClock;
