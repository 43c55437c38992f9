//! Conversation turns and the append-only history they form.

use serde::{Deserialize, Serialize};

use crate::types::Role;
use crate::value_objects::UserMessage;

/// One utterance in a conversation, tagged with its speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// A turn spoken by the student.
    pub fn user(message: &UserMessage) -> Self {
        Self::new(Role::User, message.as_str())
    }

    /// A turn produced by the tutor model.
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Role::Ai, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Render as a single `"<role>: <content>"` transcript entry.
    pub fn to_transcript_line(&self) -> String {
        format!("{}: {}", self.role, self.content)
    }
}

/// Ordered sequence of turns, oldest first.
///
/// Turns can be appended but never removed or reordered. The history is owned
/// by whoever drives the conversation; nothing below the caller keeps a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Turns added after the first `len` entries.
    ///
    /// Used by callers that only want to display what an exchange appended.
    pub fn since(&self, len: usize) -> &[Turn] {
        self.turns.get(len..).unwrap_or_default()
    }

    /// Flatten the history into newline-separated `"<role>: <content>"` lines.
    pub fn to_transcript(&self) -> String {
        self.turns
            .iter()
            .map(Turn::to_transcript_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }
}

impl From<Vec<Turn>> for ConversationHistory {
    fn from(turns: Vec<Turn>) -> Self {
        Self::from_turns(turns)
    }
}

impl<'a> IntoIterator for &'a ConversationHistory {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
