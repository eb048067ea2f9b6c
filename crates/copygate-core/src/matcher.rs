//! Candidate lookup against the corpus.
//!
//! Two sequential steps: an exact fingerprint match, then (only when that
//! yields nothing) a loose text search over sanitized title and body
//! prefixes. Store failures at either step degrade to an empty candidate set
//! with a warning; a corpus outage must never block an analysis.

use tracing::warn;

use crate::store::{CorpusEntry, CorpusStore, TEXT_RESULT_LIMIT};

/// Characters stripped from search prefixes before they reach the store.
///
/// These could corrupt a pattern-match query in substring-search backends.
const UNSAFE_QUERY_CHARS: &[char] = &['\'', '"', '%'];

/// Title prefix length for the text-search fallback.
const TITLE_PREFIX_CHARS: usize = 20;

/// Content prefix length for the text-search fallback.
const CONTENT_PREFIX_CHARS: usize = 100;

/// Find corpus entries that could plausibly overlap the candidate article.
///
/// Returns at most [`TEXT_RESULT_LIMIT`] entries. An unreachable store
/// yields an empty set, never an error.
#[tracing::instrument(skip_all, fields(fingerprint = %fingerprint))]
pub fn find_similar_candidates(
    store: &dyn CorpusStore,
    fingerprint: &str,
    plain_text: &str,
    title: &str,
) -> Vec<CorpusEntry> {
    match store.find_by_fingerprint(fingerprint) {
        Ok(entries) if !entries.is_empty() => return bounded(entries),
        Ok(_) => {}
        Err(err) => {
            warn!(error = %err, "fingerprint lookup failed, falling back to text search");
        }
    }

    let title_prefix = sanitize_prefix(title, TITLE_PREFIX_CHARS);
    let content_prefix = sanitize_prefix(plain_text, CONTENT_PREFIX_CHARS);

    match store.find_by_approximate_text(&title_prefix, &content_prefix) {
        Ok(entries) => bounded(entries),
        Err(err) => {
            warn!(error = %err, "text search failed, treating corpus as empty");
            Vec::new()
        }
    }
}

/// Take the first `max_chars` characters and drop unsafe query characters.
fn sanitize_prefix(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .filter(|c| !UNSAFE_QUERY_CHARS.contains(c))
        .collect()
}

/// Enforce the matcher's result bound regardless of store behavior.
fn bounded(mut entries: Vec<CorpusEntry>) -> Vec<CorpusEntry> {
    entries.truncate(TEXT_RESULT_LIMIT);
    entries
}
