use std::sync::Arc;

use cl_core::education::EducationProgress;
use cl_core::ports::ClockPort;
use cl_core::storage::{StorageAdapter, StorageKey};
use tracing::{debug, warn};

/// Tracks which legal awareness guides have been opened.
pub struct EducationTracker {
    storage: StorageAdapter,
    clock: Arc<dyn ClockPort>,
}

impl EducationTracker {
    pub fn new(storage: StorageAdapter, clock: Arc<dyn ClockPort>) -> Self {
        Self { storage, clock }
    }

    pub fn progress(&self) -> EducationProgress {
        self.storage
            .get_or(StorageKey::EducationProgress, EducationProgress::default())
    }

    pub fn mark_viewed(&self, guide_id: &str) -> EducationProgress {
        let mut progress = self.progress();
        progress.record_view(guide_id, self.clock.now());
        if !self.storage.set(StorageKey::EducationProgress, &progress) {
            warn!(guide_id, "Education progress not persisted");
        }
        debug!(guide_id, viewed = progress.viewed_guides.len(), "Guide viewed");
        progress
    }

    pub fn reset(&self) -> bool {
        self.storage.remove(StorageKey::EducationProgress)
    }
}
