//! Response bodies returned by the Engine's HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tutor_domain::ConversationHistory;

/// Successful `POST /api/chat` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The tutor's latest reply.
    pub response: String,
    /// The submitted history plus the new user and ai turns.
    pub conversation_history: ConversationHistory,
}

/// Machine-readable failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Underlying failure description, when there is one worth exposing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// `GET /api/health` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_missing_details() {
        let json = serde_json::to_value(ErrorResponse::new("Message is required")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Message is required"}));
    }

    #[test]
    fn error_response_includes_details() {
        let body = ErrorResponse::new("Failed to get AI response").with_details("timeout");
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["details"], "timeout");
    }
}
