//! Process Turn use case
//!
//! Runs one submitted message through the relevance filter and, when it
//! passes, through the model. Every processed message adds exactly one
//! turn to the transcript, whatever happened to it.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayReply, LlmGateway};
use crate::ports::progress::{NoProgress, TurnNotifier};
use crate::session::ChatSession;
use serde_json::json;
use solar_domain::{Model, PromptTemplate, RelevanceClassifier};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened to a submitted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The model answered.
    Answered { reply: String },
    /// The relevance filter rejected the message; the model was not contacted.
    Refused { reply: String },
    /// The model call failed; `reply` carries the error marker.
    Faulted { reply: String, message: String },
}

impl TurnOutcome {
    /// The text recorded as the assistant reply
    pub fn reply(&self) -> &str {
        match self {
            TurnOutcome::Answered { reply }
            | TurnOutcome::Refused { reply }
            | TurnOutcome::Faulted { reply, .. } => reply,
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Refused { .. })
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, TurnOutcome::Faulted { .. })
    }

    fn as_str(&self) -> &'static str {
        match self {
            TurnOutcome::Answered { .. } => "answered",
            TurnOutcome::Refused { .. } => "refused",
            TurnOutcome::Faulted { .. } => "faulted",
        }
    }
}

/// Use case for processing one user message
pub struct ProcessTurnUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    classifier: RelevanceClassifier,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> ProcessTurnUseCase<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self {
            gateway,
            model,
            classifier: RelevanceClassifier::default(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Use a specific relevance classifier
    pub fn with_classifier(mut self, classifier: RelevanceClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Record processed turns to a structured log
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn classifier(&self) -> &RelevanceClassifier {
        &self.classifier
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, session: &mut ChatSession, input: &str) -> TurnOutcome {
        self.execute_with_progress(session, input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        session: &mut ChatSession,
        input: &str,
        progress: &dyn TurnNotifier,
    ) -> TurnOutcome {
        let relevance = self.classifier.classify(input, session.transcript());
        debug!(
            relevance = relevance.as_str(),
            mode = %self.classifier.mode(),
            "Classified input"
        );

        let outcome = if relevance.is_accepted() {
            progress.on_model_call_start(&self.model);
            let reply = match session
                .get_or_create_handle(self.gateway.as_ref(), &self.model)
                .await
            {
                Ok(handle) => {
                    handle
                        .send_turn(input, PromptTemplate::system_instruction())
                        .await
                }
                Err(e) => {
                    warn!("Could not open conversation with {}: {}", self.model, e);
                    GatewayReply::Fault(e.into())
                }
            };
            progress.on_model_call_end(&self.model, reply.is_generated());

            match reply {
                GatewayReply::Generated(text) => TurnOutcome::Answered { reply: text },
                GatewayReply::Fault(fault) => TurnOutcome::Faulted {
                    reply: PromptTemplate::fault_reply(fault.message()),
                    message: fault.message().to_string(),
                },
            }
        } else {
            TurnOutcome::Refused {
                reply: PromptTemplate::refusal().to_string(),
            }
        };

        session.append_turn(input, outcome.reply());
        info!(
            outcome = outcome.as_str(),
            turns = session.transcript().len(),
            "Turn processed"
        );

        self.logger.log(ConversationEvent::new(
            "turn_processed",
            json!({
                "input": input,
                "relevance": relevance.as_str(),
                "outcome": outcome.as_str(),
                "accepted": outcome.is_accepted(),
                "fault": outcome.is_fault(),
                "reply": outcome.reply(),
                "model": self.model.to_string(),
            }),
        ));

        outcome
    }

    /// Clear the visible transcript of `session`
    pub fn clear(&self, session: &mut ChatSession) {
        let cleared = session.transcript().len();
        session.clear();
        info!(cleared, "Transcript cleared");
        self.logger.log(ConversationEvent::new(
            "transcript_cleared",
            json!({ "cleared_turns": cleared }),
        ));
    }
}
