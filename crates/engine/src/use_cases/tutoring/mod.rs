//! Tutoring use cases.
//!
//! The exchange flow is:
//! 1. Caller supplies its history and the student's new message
//! 2. The user turn is appended to a working copy
//! 3. The copy is rendered into the tutor prompt
//! 4. The completion provider answers
//! 5. The ai turn is appended and the copy is returned

use std::sync::Arc;
use tutor_domain::DomainError;

use crate::infrastructure::ports::LlmError;

mod exchange;

pub use exchange::{Exchange, Exchanged, TUTOR_TEMPERATURE};

/// Why an exchange did not produce a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TutorError {
    /// The caller's input was rejected before anything was sent upstream.
    #[error(transparent)]
    Validation(#[from] DomainError),
    /// The completion provider failed.
    #[error(transparent)]
    Service(#[from] LlmError),
}

/// Container for tutoring use cases.
pub struct TutoringUseCases {
    pub exchange: Arc<Exchange>,
}

impl TutoringUseCases {
    pub fn new(exchange: Arc<Exchange>) -> Self {
        Self { exchange }
    }
}
