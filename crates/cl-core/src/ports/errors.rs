use thiserror::Error;

/// Failure reported by a [`KeyValueStorePort`](super::KeyValueStorePort) backend.
///
/// These never reach end users: the storage adapter logs them and degrades
/// to a `false` or default result.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing {key:?}: need {requested} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        requested: usize,
        available: usize,
    },

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}
