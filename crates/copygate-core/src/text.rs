//! Text normalization.
//!
//! Strips markup and tokenizes article bodies into words and sentences for
//! the rest of the pipeline. Tag removal is a permissive pattern match
//! (anything between `<` and `>`), not a full parser; downstream consumers
//! only need approximate word boundaries.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for markup tags.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// An article body reduced to analyzable text.
///
/// Derived per analysis run and discarded afterwards.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// Body with markup removed.
    pub plain_text: String,
    /// Lowercase whitespace-delimited tokens, in document order.
    /// Never contains zero-length entries.
    pub words: Vec<String>,
}

/// Normalize raw article content for analysis.
///
/// Always succeeds; empty input yields an empty result.
pub fn normalize(raw_content: &str) -> NormalizedText {
    let plain_text = strip_tags(raw_content);
    let words = extract_words(&plain_text);
    NormalizedText { plain_text, words }
}

/// Replace markup tags with spaces.
///
/// A space (not removal) keeps words on either side of a tag separated.
pub fn strip_tags(text: &str) -> String {
    TAG_PATTERN.replace_all(text, " ").into_owned()
}

/// Extract lowercase words, discarding zero-length tokens.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Split text into sentences on `.`, `!`, and `?`.
///
/// Segments that are empty after trimming are discarded.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_tags() {
        let result = strip_tags("<p>Hello <strong>world</strong></p>");
        assert!(!result.contains('<'));
        assert!(result.contains("Hello"));
        assert!(result.contains("world"));
    }

    #[test]
    fn strip_keeps_word_boundaries() {
        // Adjacent words separated only by a tag must not merge.
        let normalized = normalize("one<br>two");
        assert_eq!(normalized.words, vec!["one", "two"]);
    }

    #[test]
    fn normalize_lowercases_words() {
        let normalized = normalize("The Quick BROWN Fox");
        assert_eq!(normalized.words, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn normalize_empty_input() {
        let normalized = normalize("");
        assert!(normalized.plain_text.is_empty());
        assert!(normalized.words.is_empty());
    }

    #[test]
    fn words_never_empty() {
        let normalized = normalize("  a \t\n b   ");
        assert!(normalized.words.iter().all(|w| !w.is_empty()));
        assert_eq!(normalized.words.len(), 2);
    }

    #[test]
    fn split_sentences_basic() {
        let sentences = split_sentences("First one. Second one! Third one?");
        assert_eq!(sentences, vec!["First one", "Second one", "Third one"]);
    }

    #[test]
    fn split_sentences_drops_empty_segments() {
        let sentences = split_sentences("Wait... what?!");
        assert_eq!(sentences, vec!["Wait", "what"]);
    }

    #[test]
    fn split_sentences_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("...").is_empty());
    }
}
