//! Bootstrap: configuration, logging, wiring and startup.

pub mod config;
pub mod startup;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, AppConfig};
pub use startup::{run_startup, StartupReport};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{build_store, wire_context, StorageBackend};
