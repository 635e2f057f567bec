//! Transcript entity
//!
//! The transcript is what the user sees: one [`Turn`] per processed
//! message, in submission order. It only grows, except for an explicit
//! [`Transcript::clear`].

use serde::{Deserialize, Serialize};

/// One processed user message and the single reply it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    user: String,
    reply: String,
}

impl Turn {
    pub fn new(user: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            reply: reply.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// Ordered sequence of turns for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end.
    pub fn push(&mut self, user: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(Turn::new(user, reply));
    }

    /// Drop every turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.push(format!("q{i}"), format!("a{i}"));
        }

        assert_eq!(transcript.len(), 5);
        for (i, turn) in transcript.iter().enumerate() {
            assert_eq!(turn.user(), format!("q{i}"));
            assert_eq!(turn.reply(), format!("a{i}"));
        }
        assert_eq!(transcript.last().unwrap().user(), "q4");
    }

    #[test]
    fn test_clear_empties() {
        let mut transcript = Transcript::new();
        transcript.push("solar?", "yes");
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_serializes_as_pairs() {
        let mut transcript = Transcript::new();
        transcript.push("Tell me about solar batteries.", "They store energy.");
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["turns"][0]["user"], "Tell me about solar batteries.");
        assert_eq!(json["turns"][0]["reply"], "They store energy.");
    }
}
