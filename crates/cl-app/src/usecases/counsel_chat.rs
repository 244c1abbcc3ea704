//! Legal counsel chat use case
//! 法律咨询对话用例

use std::sync::{Arc, PoisonError, RwLock};

use cl_core::chat::{ChatHistory, ChatMessage, ChatRole};
use cl_core::ports::{ClockPort, CounselPort, CounselQuery};
use cl_core::preferences::LanguageCode;
use cl_core::storage::{StorageAdapter, StorageKey};
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Conversation with the counsel responder.
///
/// ## Behavior / 行为
/// - A stored transcript is resumed; otherwise the chat opens with the
///   responder's greeting
/// - Each question and its answer are appended and the transcript persisted
/// - `clear` drops the transcript and starts over from the greeting
pub struct LegalCounselChat {
    storage: StorageAdapter,
    counsel: Arc<dyn CounselPort>,
    clock: Arc<dyn ClockPort>,
    history: RwLock<ChatHistory>,
}

impl LegalCounselChat {
    pub fn new(
        storage: StorageAdapter,
        counsel: Arc<dyn CounselPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let chat = Self {
            storage,
            counsel,
            clock,
            history: RwLock::new(ChatHistory::new()),
        };
        let history = match chat.storage.get::<ChatHistory>(StorageKey::ChatHistory) {
            Some(history) if !history.is_empty() => history,
            _ => chat.seeded(),
        };
        *chat.history.write().unwrap_or_else(PoisonError::into_inner) = history;
        chat
    }

    fn message(&self, sender: ChatRole, text: String) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            sender,
            text,
            timestamp: self.clock.now(),
        }
    }

    fn seeded(&self) -> ChatHistory {
        let mut history = ChatHistory::new();
        history.push(self.message(ChatRole::Bot, self.counsel.greeting()));
        history
    }

    pub fn history(&self) -> ChatHistory {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Ask a question. Returns the answer, or `None` for blank input.
    pub fn send(&self, text: &str, language: LanguageCode) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let _span = info_span!("usecase.counsel_chat.send", language = %language).entered();

        let question = self.message(ChatRole::User, text.to_string());
        let answer = self.message(
            ChatRole::Bot,
            self.counsel.respond(&CounselQuery { text, language }),
        );

        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        history.push(question);
        history.push(answer.clone());

        if !self.storage.set(StorageKey::ChatHistory, &*history) {
            warn!("Chat transcript not persisted");
        }
        info!(messages = history.len(), "Counsel answered");

        Some(answer)
    }

    /// Forget the transcript and reseed the greeting.
    pub fn clear(&self) -> bool {
        let removed = self.storage.remove(StorageKey::ChatHistory);
        *self.history.write().unwrap_or_else(PoisonError::into_inner) = self.seeded();
        removed
    }

    /// Replace the in-memory transcript with what storage holds now.
    pub fn reload(&self) {
        let history = match self.storage.get::<ChatHistory>(StorageKey::ChatHistory) {
            Some(history) if !history.is_empty() => history,
            _ => self.seeded(),
        };
        *self.history.write().unwrap_or_else(PoisonError::into_inner) = history;
    }
}
