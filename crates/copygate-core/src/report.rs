//! Analysis result types.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use
//! in both CLI JSON output and HTTP responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A corpus entry found similar to the candidate article.
///
/// Created fresh per analysis run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SimilarityMatch {
    /// Corpus id of the matched entry.
    pub id: String,
    /// URL slug of the matched entry.
    pub slug: String,
    /// Title of the matched entry.
    pub title: String,
    /// Jaccard similarity in `[0, 1]`, 1 being identical.
    pub score: f64,
}

/// The engine's verdict on one candidate article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentAnalysisResult {
    /// 0–100, 100 meaning no measured overlap with the corpus.
    pub uniqueness_score: i32,
    /// Whether the best match crosses the duplicate threshold.
    pub is_duplicate: bool,
    /// Similar corpus entries, sorted by descending score.
    pub similar_matches: Vec<SimilarityMatch>,
    /// Content fingerprint, for storage alongside the article if accepted.
    pub fingerprint: String,
    /// Primary-keyword density as a percentage.
    pub keyword_density: f64,
    /// Reading-ease score, 0–100.
    pub readability_score: i32,
    /// Total word count.
    pub word_count: usize,
    /// Improvement recommendations, in fixed evaluation order.
    pub recommendations: Vec<String>,
    /// Weighted composite SEO score, 0–100.
    pub seo_score: i32,
}
