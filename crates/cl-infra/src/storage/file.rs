use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use cl_core::ports::{KeyValueStorePort, StorageError, StoreHandleId};
use tracing::{debug, info};

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole map is held in memory and rewritten atomically after every
/// mutation. A failed write rolls the in-memory map back, so memory and disk
/// never disagree after an error.
pub struct FileKeyValueStore {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
    id: StoreHandleId,
}

impl FileKeyValueStore {
    /// Open the store at `path`, reading any existing content.
    ///
    /// A missing or empty file opens as an empty store. A file that is not a
    /// JSON object of strings is an error; the caller decides the fallback.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let items = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("parse storage file failed: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read storage file failed: {}", path.display()))
            }
        };

        info!(path = %path.display(), entries = items.len(), "Opened file storage");

        Ok(Self {
            path,
            items: Mutex::new(items),
            id: StoreHandleId::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Backend("file store mutex poisoned".to_string()))
    }

    fn ensure_parent_dir(&self) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Write `items` to a sibling temp file, then rename over the target.
    fn atomic_write(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Backend(format!("serialize storage failed: {e}")))?;

        self.ensure_parent_dir()?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), entries = items.len(), "Persisted file storage");
        Ok(())
    }

    /// Apply `change` to the map and persist; undo it if persisting fails.
    fn mutate<F>(&self, key: &str, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> Option<String>,
    {
        let mut items = self.lock()?;
        let previous = change(&mut *items);

        if let Err(e) = self.atomic_write(&items) {
            match previous {
                Some(old) => items.insert(key.to_string(), old),
                None => items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStorePort for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(key, |items| items.insert(key.to_string(), value.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if !self.lock()?.contains_key(key) {
            return Ok(());
        }
        self.mutate(key, |items| items.remove(key))
    }

    fn handle_id(&self) -> StoreHandleId {
        self.id
    }
}
