//! Keyword match mode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How domain keywords are compared against a user message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Exact equality between whitespace-split, lower-cased tokens and
    /// list entries. Multi-word keywords never match and trailing
    /// punctuation ("solar?") defeats a match.
    #[default]
    Token,
    /// Punctuation-insensitive word sequences. Multi-word keywords match
    /// when their words appear contiguously in the message.
    Phrase,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Token => "token",
            MatchMode::Phrase => "phrase",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MatchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "token" => Ok(MatchMode::Token),
            "phrase" => Ok(MatchMode::Phrase),
            other => Err(DomainError::InvalidMatchMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_token() {
        assert_eq!(MatchMode::default(), MatchMode::Token);
    }

    #[test]
    fn test_parse() {
        assert_eq!("phrase".parse::<MatchMode>().unwrap(), MatchMode::Phrase);
        assert_eq!(" Token ".parse::<MatchMode>().unwrap(), MatchMode::Token);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let mode: MatchMode = serde_json::from_str("\"phrase\"").unwrap();
        assert_eq!(mode, MatchMode::Phrase);
    }
}
