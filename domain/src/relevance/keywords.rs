//! Fixed word lists used by the relevance filter.

/// Domain keywords. A message mentioning one of these is about solar energy.
///
/// Multi-word entries only match under [`MatchMode::Phrase`](super::match_mode::MatchMode::Phrase).
pub const SOLAR_KEYWORDS: &[&str] = &[
    "solar",
    "photovoltaic",
    "pv",
    "renewable energy",
    "sun",
    "solar panel",
    "net metering",
    "solar cell",
    "solar inverter",
    "solar energy",
    "solar power",
    "solar battery",
];

/// Pronoun-like words whose meaning depends on the previous turn.
pub const BACK_REFERENCE_WORDS: &[&str] = &["it", "this", "that", "they", "them", "these", "those"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        for keyword in SOLAR_KEYWORDS.iter().chain(BACK_REFERENCE_WORDS) {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_back_reference_words_are_single_tokens() {
        assert!(BACK_REFERENCE_WORDS.iter().all(|w| !w.contains(' ')));
    }
}
