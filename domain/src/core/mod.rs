//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: hosted Gemini models the assistant can talk to
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: UTF-8 safe string helpers used for previews

pub mod error;
pub mod model;
pub mod string;
