//! Chat session state: transcript plus the lazily created conversation handle.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use solar_domain::{Model, SessionState, Transcript};
use tracing::info;

/// State of one user session.
///
/// Holds the visible [`Transcript`] and at most one conversation handle.
/// The handle is created on first use and then reused for every exchange,
/// so the model keeps seeing the accumulated dialogue. Never share one
/// `ChatSession` between users.
#[derive(Default)]
pub struct ChatSession {
    transcript: Transcript,
    handle: Option<Box<dyn LlmSession>>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        SessionState::of(&self.transcript)
    }

    /// Append a processed turn.
    pub fn append_turn(&mut self, user: impl Into<String>, reply: impl Into<String>) {
        self.transcript.push(user, reply);
    }

    /// Reset the transcript.
    ///
    /// The conversation handle is kept, so the model still remembers the
    /// cleared turns.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// The conversation handle, if one was created already.
    pub fn handle(&self) -> Option<&dyn LlmSession> {
        self.handle.as_deref()
    }

    /// Return the existing handle or create one bound to `model`.
    pub async fn get_or_create_handle<G>(
        &mut self,
        gateway: &G,
        model: &Model,
    ) -> Result<&dyn LlmSession, GatewayError>
    where
        G: LlmGateway + ?Sized,
    {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                let handle = gateway.create_session(model).await?;
                info!(session = handle.id(), model = %model, "Created conversation handle");
                handle
            }
        };

        Ok(&**self.handle.insert(handle))
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("transcript", &self.transcript)
            .field("handle", &self.handle.as_ref().map(|h| h.id()))
            .finish()
    }
}
