//! Text normalization and keyword helpers shared by every extractor.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9']+").expect("valid word regex"));

/// Lowercase + trim. The only normalization the engine performs.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True if `text` contains any of `needles` as a plain substring.
pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// True if `word` occurs in `text` bounded by non-word characters.
///
/// `word` may span several tokens ("bench press").
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    text.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}

/// True if any of `words` is a whole-word match in `text`.
pub fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| contains_word(text, w))
}

/// Lowercase alphanumeric tokens, apostrophes kept ("what's").
pub fn tokens(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Bench 185X5 \n"), "bench 185x5");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn contains_word_respects_boundaries() {
        assert!(contains_word("what's my squat pr", "pr"));
        assert!(!contains_word("show my program", "pr"));
        assert!(!contains_word("progress", "pr"));
        assert!(contains_word("incline bench press today", "bench press"));
    }

    #[test]
    fn contains_word_rejects_empty_needle() {
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn tokens_keep_apostrophes() {
        assert_eq!(tokens("what's my 1rm?"), vec!["what's", "my", "1rm"]);
    }
}
