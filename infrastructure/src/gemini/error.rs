//! Error types for the Gemini adapter

use solar_application::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),

    #[error("Prompt blocked by Gemini: {0}")]
    Blocked(String),

    #[error("Gemini returned no text (finish reason: {0})")]
    EmptyResponse(String),
}

impl From<GeminiError> for GatewayError {
    fn from(error: GeminiError) -> Self {
        match error {
            GeminiError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            GeminiError::Transport(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            GeminiError::Status { status: 404, message } => {
                GatewayError::ModelNotAvailable(message)
            }
            e @ (GeminiError::Transport(_) | GeminiError::Status { .. }) => {
                GatewayError::RequestFailed(e.to_string())
            }
            e @ (GeminiError::Decode(_)
            | GeminiError::Blocked(_)
            | GeminiError::EmptyResponse(_)) => GatewayError::InvalidResponse(e.to_string()),
        }
    }
}
