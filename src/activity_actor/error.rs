use thiserror::Error;

/// Errors that can occur while recording or reading activity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActivityError {
    #[error("Activity entry not found: {0}")]
    NotFound(String),

    #[error("Activity validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
