//! Request bodies accepted by the Engine's HTTP API.

use serde::{Deserialize, Serialize};
use tutor_domain::{ConversationHistory, DomainError, UserMessage};

/// Body of `POST /api/chat`.
///
/// Both fields are optional on the wire so that a missing message can be
/// reported as a validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Prior turns, oldest first. Absent or `null` means a new conversation.
    #[serde(default)]
    pub conversation_history: Option<ConversationHistory>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: ConversationHistory) -> Self {
        Self {
            message: Some(message.into()),
            conversation_history: Some(history),
        }
    }

    /// Split into a validated message and the supplied history.
    pub fn into_parts(self) -> Result<(UserMessage, ConversationHistory), DomainError> {
        let message = UserMessage::from_optional(self.message)?;
        Ok((message, self.conversation_history.unwrap_or_default()))
    }
}
