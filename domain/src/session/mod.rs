//! Chat session domain.
//!
//! - [`transcript::Transcript`]: the ordered user/assistant pairs shown to the user
//! - [`state::SessionState`]: observable Empty / Active state of a session
//! - [`entities::Message`]: a single message of the dialogue sent to the model

pub mod entities;
pub mod state;
pub mod transcript;
