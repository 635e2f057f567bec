//! Gemini REST adapter
//!
//! Implements [`LlmGateway`](solar_application::LlmGateway) on top of the
//! `generateContent` endpoint of the Gemini API.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
