//! Observable session state

use super::transcript::Transcript;

/// The two observable states of a chat session.
///
/// Empty → Active on the first processed turn (accepted or rejected);
/// Active → Empty only through an explicit clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Active,
}

impl SessionState {
    pub fn of(transcript: &Transcript) -> Self {
        if transcript.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Active
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Empty => "empty",
            SessionState::Active => "active",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_transcript() {
        let mut transcript = Transcript::new();
        assert_eq!(SessionState::of(&transcript), SessionState::Empty);

        transcript.push("What's the weather today?", "refused");
        assert_eq!(SessionState::of(&transcript), SessionState::Active);

        transcript.clear();
        assert_eq!(SessionState::of(&transcript), SessionState::Empty);
    }
}
