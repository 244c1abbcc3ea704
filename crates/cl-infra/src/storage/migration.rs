use cl_core::ports::StorageMigrationPort;
use cl_core::storage::{StorageAdapter, StorageKey, CURRENT_STORAGE_VERSION};
use tracing::{error, info, info_span, warn};

/// Result of one start-up migration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Stored version already current; nothing was written.
    UpToDate,
    /// No version stored yet; the current version was stamped.
    Initialized,
    /// Steps ran and the version was rewritten to current.
    Migrated { from: String, steps: usize },
    /// The chain ended before reaching current (no step starts at the
    /// version reached); the steps that exist ran and current was stamped.
    Restamped { from: String, steps: usize },
    /// A step failed or the chain loops back on itself. The version stays at
    /// `at` so the next start retries from there.
    Failed { at: String, error: String },
}

/// Brings persisted data up to [`CURRENT_STORAGE_VERSION`].
pub struct StorageMigrator {
    migrations: Vec<Box<dyn StorageMigrationPort>>,
}

impl StorageMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![
                // Box::new(MigrationV1_0ToV1_1),
            ],
        }
    }

    pub fn with_migrations(migrations: Vec<Box<dyn StorageMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Compare the stored schema version with the current one and run the
    /// step chain on mismatch. Running it again right after is a no-op.
    pub fn run(&self, storage: &StorageAdapter) -> MigrationOutcome {
        let _span = info_span!("infra.storage.migrate").entered();

        let Some(stored) = storage.get::<String>(StorageKey::StorageVersion) else {
            info!(version = CURRENT_STORAGE_VERSION, "Stamping storage version");
            stamp(storage);
            return MigrationOutcome::Initialized;
        };

        if stored == CURRENT_STORAGE_VERSION {
            info!(version = %stored, "Storage data is up to date");
            return MigrationOutcome::UpToDate;
        }

        let mut current = stored.clone();
        let mut visited = vec![stored.clone()];
        let mut steps = 0;
        while current != CURRENT_STORAGE_VERSION {
            let Some(step) = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
            else {
                warn!(
                    from = %stored,
                    reached = %current,
                    "No storage migration registered for version; stamping current"
                );
                stamp(storage);
                return MigrationOutcome::Restamped {
                    from: stored,
                    steps,
                };
            };

            if visited.iter().any(|v| v == step.to_version()) {
                error!(
                    from = step.from_version(),
                    to = step.to_version(),
                    "Storage migration chain loops; stopping"
                );
                record_progress(storage, &current, steps);
                return MigrationOutcome::Failed {
                    error: format!("migration chain loops back to {}", step.to_version()),
                    at: current,
                };
            }

            if let Err(e) = step.migrate(storage) {
                error!(
                    from = step.from_version(),
                    to = step.to_version(),
                    error = %e,
                    "Storage migration step failed"
                );
                record_progress(storage, &current, steps);
                return MigrationOutcome::Failed {
                    at: current,
                    error: format!("{e:#}"),
                };
            }

            info!(from = step.from_version(), to = step.to_version(), "Applied storage migration");
            current = step.to_version().to_string();
            visited.push(current.clone());
            steps += 1;
        }

        stamp(storage);
        MigrationOutcome::Migrated {
            from: stored,
            steps,
        }
    }
}

impl Default for StorageMigrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Record the last version reached so finished steps are not replayed.
fn record_progress(storage: &StorageAdapter, version: &str, steps: usize) {
    if steps > 0 && !storage.set(StorageKey::StorageVersion, version) {
        warn!(version, "Could not record partial migration progress");
    }
}

fn stamp(storage: &StorageAdapter) {
    if !storage.set(StorageKey::StorageVersion, CURRENT_STORAGE_VERSION) {
        warn!("Could not record storage version; migration will re-run next start");
    }
}
