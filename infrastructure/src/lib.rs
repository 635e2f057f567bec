//! Infrastructure layer for solar-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileClassifierConfig, FileConfig, FileGeminiConfig,
    FileLoggingConfig, FileModelConfig, FileOutputConfig, FileProvidersConfig, FileReplConfig,
    resolve_api_key,
};
pub use gemini::{
    error::GeminiError,
    gateway::{DEFAULT_BASE_URL, GeminiLlmGateway, GeminiSettings},
    protocol::GenerationConfig,
    session::GeminiChatSession,
};
pub use logging::JsonlConversationLogger;
