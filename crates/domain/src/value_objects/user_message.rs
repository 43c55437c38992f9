//! Validated student message newtype
//!
//! A message must contain something other than whitespace. Unlike the name
//! newtypes elsewhere, the content is kept exactly as submitted: the user turn
//! recorded in the history must match what the student typed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A non-blank message from the student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserMessage(String);

impl UserMessage {
    /// Create a new validated message.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the message is empty or only whitespace.
    pub fn new(message: impl Into<String>) -> Result<Self, DomainError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainError::validation("Message is required"));
        }
        Ok(Self(message))
    }

    /// Validate an optional message, treating `None` the same as a blank one.
    pub fn from_optional(message: Option<String>) -> Result<Self, DomainError> {
        match message {
            Some(message) => Self::new(message),
            None => Err(DomainError::validation("Message is required")),
        }
    }

    /// Returns the message as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserMessage {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for UserMessage {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<UserMessage> for String {
    fn from(message: UserMessage) -> String {
        message.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_message() {
        let message = UserMessage::new("What is a derivative?").unwrap();
        assert_eq!(message.as_str(), "What is a derivative?");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let message = UserMessage::new("  why?  ").unwrap();
        assert_eq!(message.as_str(), "  why?  ");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(UserMessage::new("").unwrap_err().is_validation());
        assert!(UserMessage::new(" \n\t ").unwrap_err().is_validation());
    }

    #[test]
    fn missing_message_is_a_validation_error() {
        let err = UserMessage::from_optional(None).unwrap_err();
        assert_eq!(err, DomainError::validation("Message is required"));
    }

    #[test]
    fn deserialize_rejects_blank() {
        let result: Result<UserMessage, _> = serde_json::from_str("\"   \"");
        assert!(result.is_err());
    }
}
