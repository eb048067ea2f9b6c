//! Text statistics: word count, keyword density, readability.
//!
//! Every function degrades to a well-defined zero/neutral value on empty
//! input instead of failing; malformed articles still get a full verdict.

use regex::Regex;

use crate::text;

/// Neutral score returned when a text has no scorable sentences or words.
const NEUTRAL_READABILITY: i32 = 50;

/// Count whitespace-delimited non-empty words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Percentage of words that are whole-word matches of `keyword`, case-insensitive.
///
/// Zero when the text has no words or the keyword is blank. The keyword is
/// escaped before it reaches the regex engine, so user input cannot corrupt
/// the pattern.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let total = word_count(text);
    let keyword = keyword.trim();
    if total == 0 || keyword.is_empty() {
        return 0.0;
    }

    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    let Ok(re) = Regex::new(&pattern) else {
        return 0.0;
    };

    let matches = re.find_iter(text).count();
    (matches as f64 / total as f64) * 100.0
}

/// Simplified Flesch reading-ease score, clamped to `[0, 100]`.
///
/// `206.835 − 1.015·(words/sentences) − 84.6·(avg word length / 5)`, with
/// average word length standing in for syllable counting. Texts with no
/// words or no sentences score a neutral 50.
pub fn readability(text: &str) -> i32 {
    let sentences = text::split_sentences(text).len();
    let words = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count();

    if sentences == 0 || words == 0 {
        return NEUTRAL_READABILITY;
    }

    let avg_sentence_length = words as f64 / sentences as f64;
    let alnum_chars = text.chars().filter(|c| c.is_alphanumeric()).count();
    let avg_word_length = alnum_chars as f64 / words as f64;

    let score = 206.835 - 1.015 * avg_sentence_length - 84.6 * (avg_word_length / 5.0);
    score.round().clamp(0.0, 100.0) as i32
}
