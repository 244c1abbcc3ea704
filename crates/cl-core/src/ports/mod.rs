//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core never names a concrete
//! storage backend, clock or counsel engine; `cl-infra` provides them and
//! the root crate wires them together.
//!
//! Every port here is synchronous. No operation in the core suspends or
//! yields, so there is nothing to await.

mod clock;
mod counsel;
mod errors;
mod key_value_store;
mod migration;

pub use clock::ClockPort;
pub use counsel::{CounselPort, CounselQuery};
pub use errors::StorageError;
pub use key_value_store::{KeyValueStorePort, RawStorageEvent, StoreHandleId};
pub use migration::StorageMigrationPort;
