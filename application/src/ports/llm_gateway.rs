//! LLM Gateway port
//!
//! Defines the interface for communicating with the hosted model, and the
//! boundary at which remote failures become plain data.

use async_trait::async_trait;
use solar_domain::Model;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// A recovered failure of a model call, carrying a display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultIndicator {
    message: String,
}

impl FaultIndicator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<GatewayError> for FaultIndicator {
    fn from(error: GatewayError) -> Self {
        Self::new(error.to_string())
    }
}

/// Result of one exchange with the model: generated text or a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    Generated(String),
    Fault(FaultIndicator),
}

impl GatewayReply {
    pub fn is_generated(&self) -> bool {
        matches!(self, GatewayReply::Generated(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the
/// hosted model. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new conversation bound to the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active conversation with the hosted model (the conversation handle)
///
/// A session accumulates the dialogue, so every call sees the turns
/// exchanged before it.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Unique identifier of this conversation
    fn id(&self) -> &str;

    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send the next message with `system_instruction` attached and get the reply
    async fn send(&self, content: &str, system_instruction: &str) -> Result<String, GatewayError>;

    /// Send the next message, converting any failure into a [`FaultIndicator`].
    ///
    /// Never returns an error; callers always receive text or a fault.
    async fn send_turn(&self, content: &str, system_instruction: &str) -> GatewayReply {
        match self.send(content, system_instruction).await {
            Ok(text) => GatewayReply::Generated(text),
            Err(e) => {
                warn!(session = self.id(), model = %self.model(), "Model call failed: {}", e);
                GatewayReply::Fault(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSession {
        model: Model,
    }

    #[async_trait]
    impl LlmSession for FailingSession {
        fn id(&self) -> &str {
            "failing"
        }

        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str, _system: &str) -> Result<String, GatewayError> {
            if content == "ok" {
                Ok("fine".to_string())
            } else {
                Err(GatewayError::RequestFailed("quota exceeded".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn test_send_turn_converts_errors_to_faults() {
        let session = FailingSession {
            model: Model::default(),
        };

        let reply = session.send_turn("boom", "sys").await;
        assert_eq!(
            reply,
            GatewayReply::Fault(FaultIndicator::new("Request failed: quota exceeded"))
        );
        assert!(!reply.is_generated());

        let reply = session.send_turn("ok", "sys").await;
        assert_eq!(reply, GatewayReply::Generated("fine".to_string()));
    }

    #[test]
    fn test_fault_from_gateway_error() {
        let fault: FaultIndicator = GatewayError::Timeout.into();
        assert_eq!(fault.message(), "Timeout");
    }
}
