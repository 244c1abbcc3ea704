//! Legal education progress
//!
//! Tracks which legal awareness guides the citizen has opened.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationProgress {
    #[serde(default)]
    pub viewed_guides: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed_guide: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl EducationProgress {
    pub fn record_view(&mut self, guide_id: &str, at: DateTime<Utc>) {
        self.viewed_guides.insert(guide_id.to_string());
        self.last_viewed_guide = Some(guide_id.to_string());
        self.last_viewed_at = Some(at);
    }

    pub fn has_viewed(&self, guide_id: &str) -> bool {
        self.viewed_guides.contains(guide_id)
    }
}
