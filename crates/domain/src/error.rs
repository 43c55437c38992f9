//! Unified error types for the domain layer
//!
//! Provides a common error type for rejecting invalid conversation input,
//! so adapters can tell caller mistakes apart from upstream failures without
//! matching on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a required message is blank)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects such as roles)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for caller-supplied input that breaks an invariant.
    ///
    /// # Example
    /// ```ignore
    /// if message.trim().is_empty() {
    ///     return Err(DomainError::validation("Message is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
