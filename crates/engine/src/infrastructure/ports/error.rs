//! Error types for port operations.

/// Failures of the completion provider.
///
/// Every variant carries the provider's own description so it can be
/// surfaced to callers as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// The client is missing required configuration (e.g., an API key).
    #[error("LLM client not configured: {0}")]
    NotConfigured(String),
    /// Transport failure, timeout, or an unexpected HTTP status.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    /// The provider rejected the credential.
    #[error("LLM request unauthorized: {0}")]
    Unauthorized(String),
    /// The provider is throttling requests.
    #[error("LLM rate limit exceeded: {0}")]
    RateLimited(String),
    /// The provider answered with something we could not use.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Map a non-success HTTP status from the provider to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Unauthorized(format!("status {status}: {body}")),
            429 => Self::RateLimited(format!("status {status}: {body}")),
            _ => Self::RequestFailed(format!("status {status}: {body}")),
        }
    }
}
