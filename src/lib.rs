//! CiviLink Library
//!
//! Boots a citizen-portal session: loads configuration, installs logging,
//! wires storage and use cases, and runs the startup sequence.

pub mod bootstrap;

use std::path::{Path, PathBuf};

use cl_infra::StorageMigrator;

pub use bootstrap::{AppConfig, StartupReport};
pub use cl_app::{AppContext, Route};

/// A started session.
pub struct Portal {
    pub context: AppContext,
    pub startup: StartupReport,
}

/// `<config dir>/civilink/civilink.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("civilink").join("civilink.toml"))
}

/// Wire and start a session for `config`. Logging is left to the caller.
pub fn start(config: &AppConfig) -> Portal {
    let context = bootstrap::wire_context(bootstrap::build_store(config));
    let startup = bootstrap::run_startup(&context, &StorageMigrator::new());
    Portal { context, startup }
}

/// Load configuration, install the tracing subscriber and start a session.
///
/// Without an explicit path the default config file is used when it
/// exists; otherwise every setting takes its default.
///
/// # Errors
///
/// Fails only when a config file exists but cannot be read or parsed.
pub fn run(config_path: Option<&Path>) -> anyhow::Result<Portal> {
    let config = match config_path {
        Some(path) => bootstrap::load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => bootstrap::load_config(&path)?,
            _ => AppConfig::empty(),
        },
    };

    if let Err(e) = bootstrap::init_tracing_subscriber(&config.log_filter) {
        eprintln!("Failed to initialize tracing: {e:#}");
    }

    Ok(start(&config))
}
