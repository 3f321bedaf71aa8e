use thiserror::Error;

use super::parse::FormatError;
use super::types::ActionKind;

/// Failures talking to the completion service.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

/// Failure of a single generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The structured reply did not match the requested shape.
    #[error("{action} response has an unexpected format: {source}")]
    Format {
        action: ActionKind,
        #[source]
        source: FormatError,
    },

    /// Transport, auth, quota or empty-response failure.
    #[error("{action} request failed: {source}")]
    Service {
        action: ActionKind,
        #[source]
        source: BackendError,
    },
}

impl GenerationError {
    pub fn action(&self) -> ActionKind {
        match self {
            GenerationError::Format { action, .. } | GenerationError::Service { action, .. } => {
                *action
            }
        }
    }

    /// Fixed, action-specific message for the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Format { action, .. } => match action {
                ActionKind::Summary => "Failed to generate summary. Please try again.",
                ActionKind::Strategy => {
                    "Failed to generate study plan. The model might have returned an unexpected format."
                }
                ActionKind::Quiz => {
                    "Failed to generate quiz. The model might have returned an unexpected format."
                }
            },
            GenerationError::Service { action, .. } => match action {
                ActionKind::Summary => "Failed to generate summary. Please try again.",
                ActionKind::Strategy => "Failed to generate study plan. Please try again.",
                ActionKind::Quiz => "Failed to generate quiz. Please try again.",
            },
        }
    }
}
