//! Session state
//!
//! One [`ChatSession`] per user session, passed explicitly into every
//! orchestration call.

mod chat_session;

pub use chat_session::ChatSession;
