//! Topic relevance domain.
//!
//! Decides whether a user message is about solar energy and may be
//! forwarded to the model.
//!
//! - [`keywords`]: the fixed domain-keyword and back-reference word lists
//! - [`match_mode::MatchMode`]: how keywords are compared against input
//! - [`classifier::RelevanceClassifier`]: the filter itself

pub mod classifier;
pub mod keywords;
pub mod match_mode;
