//! Application layer for solar-assistant
//!
//! This crate contains use cases, port definitions, and the per-user
//! session state. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{FaultIndicator, GatewayError, GatewayReply, LlmGateway, LlmSession},
    progress::{NoProgress, TurnNotifier},
};
pub use session::ChatSession;
pub use use_cases::process_turn::{ProcessTurnUseCase, TurnOutcome};
