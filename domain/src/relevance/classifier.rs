//! Solar relevance classifier.
//!
//! A message is relevant when it contains a domain keyword. A message
//! without one is still relevant when it contains a back-reference word
//! ("it", "they", ...) and the user message of the most recent turn
//! contains a keyword. Only that single turn is consulted, and it is
//! checked for keywords alone, so a chain of back-references never
//! reaches further than one turn.

use super::keywords::{BACK_REFERENCE_WORDS, SOLAR_KEYWORDS};
use super::match_mode::MatchMode;
use crate::session::transcript::Transcript;

/// Why a message was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    /// The message itself contains a domain keyword.
    Keyword,
    /// The message refers back to a previous turn that was about solar.
    BackReference,
    /// Neither a keyword nor a resolvable back-reference.
    Unrelated,
}

impl Relevance {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Relevance::Unrelated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::Keyword => "keyword",
            Relevance::BackReference => "back_reference",
            Relevance::Unrelated => "unrelated",
        }
    }
}

/// Keyword-based topic filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceClassifier {
    mode: MatchMode,
}

impl RelevanceClassifier {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if `input` may be forwarded to the model.
    pub fn is_relevant(&self, input: &str, prior: &Transcript) -> bool {
        self.classify(input, prior).is_accepted()
    }

    /// Classify `input` against the transcript that precedes it.
    pub fn classify(&self, input: &str, prior: &Transcript) -> Relevance {
        let words = self.words(input);

        if self.has_keyword(&words) {
            return Relevance::Keyword;
        }

        if !self.has_back_reference(&words) {
            return Relevance::Unrelated;
        }

        // Depth 1: the previous user message gets no context of its own.
        match prior.last() {
            Some(turn) if self.has_keyword(&self.words(turn.user())) => Relevance::BackReference,
            _ => Relevance::Unrelated,
        }
    }

    fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        match self.mode {
            MatchMode::Token => lowered.split_whitespace().map(str::to_string).collect(),
            MatchMode::Phrase => lowered
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    fn has_keyword(&self, words: &[String]) -> bool {
        match self.mode {
            MatchMode::Token => SOLAR_KEYWORDS
                .iter()
                .any(|keyword| words.iter().any(|w| w == keyword)),
            MatchMode::Phrase => SOLAR_KEYWORDS.iter().any(|keyword| {
                let phrase: Vec<&str> = keyword.split_whitespace().collect();
                words
                    .windows(phrase.len())
                    .any(|window| window.iter().zip(&phrase).all(|(w, p)| w == p))
            }),
        }
    }

    fn has_back_reference(&self, words: &[String]) -> bool {
        BACK_REFERENCE_WORDS
            .iter()
            .any(|reference| words.iter().any(|w| w == reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> RelevanceClassifier {
        RelevanceClassifier::new(MatchMode::Token)
    }

    fn phrase() -> RelevanceClassifier {
        RelevanceClassifier::new(MatchMode::Phrase)
    }

    fn transcript_with(user: &str) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.push(user, "...");
        transcript
    }

    // ==================== Keyword matching ====================

    #[test]
    fn test_keyword_accepted_regardless_of_transcript() {
        let classifier = token();
        let prior = transcript_with("What's the weather today?");
        for input in [
            "What is the cost of solar panels?",
            "Is PV worth it",
            "how does the sun make power",
            "photovoltaic efficiency numbers",
        ] {
            assert!(classifier.is_relevant(input, &Transcript::new()), "{input}");
            assert!(classifier.is_relevant(input, &prior), "{input}");
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(
            token().classify("SOLAR installers near me", &Transcript::new()),
            Relevance::Keyword
        );
    }

    #[test]
    fn test_unrelated_input_rejected() {
        let prior = transcript_with("Tell me about solar batteries.");
        assert!(!token().is_relevant("What's the weather today?", &Transcript::new()));
        assert!(!token().is_relevant("What's the weather today?", &prior));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(!token().is_relevant("", &Transcript::new()));
        assert!(!token().is_relevant("   ", &transcript_with("solar")));
        assert!(!phrase().is_relevant("", &transcript_with("solar")));
    }

    #[test]
    fn test_token_mode_never_matches_multi_word_keywords() {
        // "net metering" cannot equal a single whitespace-split token.
        assert!(!token().is_relevant("How does net metering work", &Transcript::new()));
    }

    #[test]
    fn test_token_mode_punctuation_defeats_match() {
        assert!(!token().is_relevant("Is it solar?", &Transcript::new()));
        assert!(token().is_relevant("Is it solar ?", &Transcript::new()));
    }

    #[test]
    fn test_phrase_mode_matches_multi_word_keywords() {
        assert_eq!(
            phrase().classify("How does net metering work", &Transcript::new()),
            Relevance::Keyword
        );
        assert!(phrase().is_relevant("Is it solar?", &Transcript::new()));
    }

    #[test]
    fn test_phrase_mode_respects_word_boundaries() {
        assert!(!phrase().is_relevant("Are you free on sunday", &Transcript::new()));
        assert!(!phrase().is_relevant("metering net", &Transcript::new()));
    }

    // ==================== Back-reference resolution ====================

    #[test]
    fn test_back_reference_uses_previous_user_message() {
        let prior = transcript_with("Tell me about solar batteries.");
        assert_eq!(
            token().classify("How much do they cost?", &prior),
            Relevance::BackReference
        );
    }

    #[test]
    fn test_back_reference_without_transcript_rejected() {
        assert!(!token().is_relevant("How much do they cost?", &Transcript::new()));
        assert!(!token().is_relevant("it", &Transcript::new()));
    }

    #[test]
    fn test_back_reference_only_word_with_solar_history() {
        let prior = transcript_with("solar inverters");
        assert!(token().is_relevant("it", &prior));
        assert!(token().is_relevant("those", &prior));
    }

    #[test]
    fn test_back_reference_to_unrelated_turn_rejected() {
        let prior = transcript_with("What's the weather today?");
        assert!(!token().is_relevant("Will it rain?", &prior));
    }

    #[test]
    fn test_back_reference_consults_only_most_recent_turn() {
        let mut prior = Transcript::new();
        prior.push("Tell me about solar panels", "...");
        prior.push("What's the weather today?", "...");
        assert!(!token().is_relevant("Are they expensive?", &prior));
    }

    #[test]
    fn test_back_reference_does_not_chain() {
        // The previous message is itself a back-reference to a solar turn,
        // but it is checked for keywords only.
        let mut prior = Transcript::new();
        prior.push("Tell me about solar panels", "...");
        prior.push("How long do they last?", "...");
        assert!(!token().is_relevant("Is that covered by warranty?", &prior));
    }

    #[test]
    fn test_back_reference_word_must_be_whole_token() {
        let prior = transcript_with("solar");
        // "item" and "thisway" contain back-reference words but are not them.
        assert!(!token().is_relevant("item thisway", &prior));
    }

    #[test]
    fn test_phrase_mode_back_reference_ignores_punctuation() {
        let prior = transcript_with("What is net metering?");
        assert!(phrase().is_relevant("Is it worth it?", &prior));
        // Token mode sees "it?" and "metering?" as tokens.
        assert!(!token().is_relevant("Is that worth it?", &prior));
    }

    #[test]
    fn test_classify_reports_accepted_flag() {
        assert!(Relevance::Keyword.is_accepted());
        assert!(Relevance::BackReference.is_accepted());
        assert!(!Relevance::Unrelated.is_accepted());
    }
}
