//! Pairwise text similarity.
//!
//! Jaccard overlap of significant-word sets. Words of four characters or
//! fewer are dropped as noise before comparison; short common words dominate
//! any two English texts.

use std::collections::HashSet;

use crate::report::SimilarityMatch;
use crate::store::CorpusEntry;
use crate::text;

/// Maximum length (inclusive) of a word still considered noise.
const NOISE_WORD_LEN: usize = 4;

/// Build the significant-word set of a text.
pub fn significant_words(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() > NOISE_WORD_LEN)
        .collect()
}

/// Jaccard similarity of two texts' significant-word sets, in `[0, 1]`.
///
/// Two empty sets score 0.0, not 1.0: empty content must never be classified
/// as safe because it looked unique.
pub fn similarity(a: &str, b: &str) -> f64 {
    jaccard(&significant_words(a), &significant_words(b))
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Score matcher candidates against the candidate article's plain text.
///
/// Candidate bodies are stripped of markup before comparison. Scores at or
/// below `floor` are discarded as noise; survivors are sorted by descending
/// score (stable, so store order breaks ties).
pub fn score_candidates(
    plain_text: &str,
    candidates: &[CorpusEntry],
    floor: f64,
) -> Vec<SimilarityMatch> {
    let words = significant_words(plain_text);

    let mut matches: Vec<SimilarityMatch> = candidates
        .iter()
        .map(|entry| {
            let entry_text = text::strip_tags(&entry.content);
            SimilarityMatch {
                id: entry.id.clone(),
                slug: entry.slug.clone(),
                title: entry.title.clone(),
                score: jaccard(&words, &significant_words(&entry_text)),
            }
        })
        .filter(|m| m.score > floor)
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches
}
