//! Prompt domain
//!
//! The fixed system instruction and the canned texts the assistant replies with.

mod template;

pub use template::{ERROR_MARKER, PromptTemplate, REFUSAL_MESSAGE, SYSTEM_INSTRUCTION};
