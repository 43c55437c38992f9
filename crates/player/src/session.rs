//! Interactive chat session state.
//!
//! The session owns the conversation history for as long as the player runs.
//! It only replaces that history after a successful exchange, so a failed call
//! never leaves a user turn without its reply.

use std::sync::Arc;
use tutor_domain::{ConversationHistory, Turn};

use crate::backend::TutorBackend;
use crate::error::PlayerError;

pub struct ChatSession {
    backend: Arc<dyn TutorBackend>,
    history: ConversationHistory,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self {
            backend,
            history: ConversationHistory::new(),
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn backend(&self) -> &dyn TutorBackend {
        self.backend.as_ref()
    }

    /// Send one message.
    ///
    /// Returns the turns this exchange appended, or `None` if the input was blank
    /// and nothing was sent.
    pub async fn submit(&mut self, input: &str) -> Result<Option<&[Turn]>, PlayerError> {
        if input.trim().is_empty() {
            return Ok(None);
        }

        let before = self.history.len();
        let exchanged = self.backend.exchange(&self.history, input).await?;
        self.history = exchanged.history;

        tracing::debug!(turns = self.history.len(), "Session history updated");
        Ok(Some(self.history.since(before)))
    }

    /// Start over with an empty conversation.
    pub fn reset(&mut self) {
        self.history = ConversationHistory::new();
    }
}
