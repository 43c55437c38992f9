//! Player error types.

use tutor_engine::use_cases::TutorError;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The in-process exchange failed.
    #[error(transparent)]
    Tutor(#[from] TutorError),
    /// The engine could not be reached, or its reply could not be read.
    #[error("Engine request failed: {0}")]
    Transport(String),
    /// The engine answered with an error payload.
    #[error("Engine returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Invalid engine URL: {0}")]
    InvalidUrl(String),
}
