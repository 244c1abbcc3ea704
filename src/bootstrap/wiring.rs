//! # Dependency Wiring / 依赖注入
//!
//! Turns an [`AppConfig`] into a ready [`AppContext`]. This is the only
//! place that names concrete infrastructure types.

use std::path::PathBuf;
use std::sync::Arc;

use cl_app::{AppContext, AppDeps};
use cl_core::ports::KeyValueStorePort;
use cl_infra::fs::default_storage_path;
use cl_infra::{CannedCounsel, FileKeyValueStore, SharedMemoryStore, SystemClock};
use tracing::{info, warn};

use super::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

impl StorageBackend {
    /// Empty or unrecognised values fall back to [`StorageBackend::Memory`].
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => StorageBackend::File,
            "memory" | "" => StorageBackend::Memory,
            other => {
                warn!(backend = other, "Unknown storage backend; using memory");
                StorageBackend::Memory
            }
        }
    }
}

fn memory_store(config: &AppConfig) -> Arc<dyn KeyValueStorePort> {
    let shared = match config.storage_quota_bytes {
        Some(quota) => SharedMemoryStore::with_quota(usize::try_from(quota).unwrap_or(usize::MAX)),
        None => SharedMemoryStore::new(),
    };
    Arc::new(shared.open_handle())
}

fn storage_path(config: &AppConfig) -> anyhow::Result<PathBuf> {
    if config.storage_path.as_os_str().is_empty() {
        default_storage_path()
    } else {
        Ok(config.storage_path.clone())
    }
}

/// Build the key-value backend named by the config.
///
/// A file store that cannot be opened (unreadable, corrupt, no data dir)
/// degrades to an in-memory store so the session can still run.
pub fn build_store(config: &AppConfig) -> Arc<dyn KeyValueStorePort> {
    match StorageBackend::from_config(&config.storage_backend) {
        StorageBackend::Memory => {
            info!(quota = ?config.storage_quota_bytes, "Using in-memory storage");
            memory_store(config)
        }
        StorageBackend::File => match storage_path(config).and_then(FileKeyValueStore::open) {
            Ok(store) => {
                info!(path = %store.path().display(), "Using file storage");
                Arc::new(store)
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "File storage unavailable; using memory for this session");
                memory_store(config)
            }
        },
    }
}

/// Wire the production dependencies around `store`.
pub fn wire_context(store: Arc<dyn KeyValueStorePort>) -> AppContext {
    AppContext::new(AppDeps {
        store,
        counsel: Arc::new(CannedCounsel::new()),
        clock: Arc::new(SystemClock),
    })
}
