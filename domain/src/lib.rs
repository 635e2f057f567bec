//! Domain layer for solar-assistant
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Relevance filter
//!
//! Every user message goes through [`RelevanceClassifier`] before it may
//! reach the model. Messages about anything but solar energy receive the
//! fixed [`REFUSAL_MESSAGE`] instead.
//!
//! ## Transcript
//!
//! The [`Transcript`] holds one [`Turn`] per processed message, accepted
//! or not, in submission order.

pub mod config;
pub mod core;
pub mod prompt;
pub mod relevance;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError,
    model::Model,
    string::{preview, truncate},
};
pub use prompt::{ERROR_MARKER, PromptTemplate, REFUSAL_MESSAGE, SYSTEM_INSTRUCTION};
pub use relevance::{
    classifier::{Relevance, RelevanceClassifier},
    keywords::{BACK_REFERENCE_WORDS, SOLAR_KEYWORDS},
    match_mode::MatchMode,
};
pub use session::{
    entities::{Message, Role},
    state::SessionState,
    transcript::{Transcript, Turn},
};
