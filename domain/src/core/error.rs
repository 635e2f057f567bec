//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid match mode: {0} (expected \"token\" or \"phrase\")")]
    InvalidMatchMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_match_mode_display() {
        let error = DomainError::InvalidMatchMode("fuzzy".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid match mode: fuzzy (expected \"token\" or \"phrase\")"
        );
    }
}
