//! Legal counsel chat transcript
//!
//! Persisted as a JSON array of messages under
//! [`StorageKey::ChatHistory`](crate::storage::StorageKey::ChatHistory).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub sender: ChatRole,
    #[serde(rename = "content")]
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory(Vec<ChatMessage>);

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.0.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.0
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
