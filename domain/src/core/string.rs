//! String utilities for the domain layer.

/// Build a preview label from the first `max_chars` characters of `s`,
/// always followed by `...`.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
pub fn preview(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_still_gets_ellipsis() {
        assert_eq!(preview("How do solar panels work?", 50), "How do solar panels work?...");
    }

    #[test]
    fn test_preview_cuts_at_fifty_chars() {
        let input = "a".repeat(80);
        let label = preview(&input, 50);
        assert_eq!(label, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("☀☀☀☀", 2), "☀☀...");
        assert_eq!(preview("", 50), "...");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // '☀' is 3 bytes: max_len=7 -> target=4 -> back to boundary at 3
        assert_eq!(truncate("☀☀☀", 7), "☀...");
        assert_eq!(truncate("☀☀☀", 9), "☀☀☀");
    }
}
