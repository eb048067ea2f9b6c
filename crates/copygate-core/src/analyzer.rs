//! Analysis orchestration.
//!
//! [`ContentAnalyzer::analyze`] wires the pipeline together: normalize →
//! fingerprint → candidate lookup → similarity scoring → text statistics →
//! recommendations → SEO score. Failure is absorbed, never propagated: store
//! errors already degrade to maximal uniqueness inside the matcher, and a
//! panic anywhere in the pipeline is converted into a fixed conservative
//! result. Callers always receive a verdict.

use std::panic::{self, AssertUnwindSafe};

use tracing::{error, instrument};

use crate::config::Thresholds;
use crate::report::{ContentAnalysisResult, SimilarityMatch};
use crate::store::CorpusStore;
use crate::{fingerprint, matcher, recommend, seo, similarity, stats, text};

/// Uniqueness reported by the degraded path: high enough not to block
/// publishing, low enough not to claim certainty.
const DEGRADED_UNIQUENESS: i32 = 85;

/// Keyword density reported by the degraded path.
const DEGRADED_KEYWORD_DENSITY: f64 = 1.0;

/// Readability reported by the degraded path.
const DEGRADED_READABILITY: i32 = 70;

/// The single recommendation carried by a degraded result.
const DEGRADED_RECOMMENDATION: &str =
    "Consider expanding this content with more specific information.";

/// The analysis engine.
///
/// Each invocation is a pure function of its inputs plus one external read
/// through the corpus store; no shared mutable state exists between runs, so
/// analyzers may run freely in parallel.
pub struct ContentAnalyzer<'a> {
    store: &'a dyn CorpusStore,
    thresholds: Thresholds,
}

impl<'a> ContentAnalyzer<'a> {
    /// Create an analyzer over `store` with the given thresholds.
    pub const fn new(store: &'a dyn CorpusStore, thresholds: Thresholds) -> Self {
        Self { store, thresholds }
    }

    /// Analyze one candidate article.
    ///
    /// Never fails and never panics: unexpected errors yield the degraded
    /// conservative result instead.
    #[instrument(skip_all, fields(title = %title, content_len = content.len()))]
    pub fn analyze(
        &self,
        title: &str,
        content: &str,
        primary_keyword: &str,
    ) -> ContentAnalysisResult {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_pipeline(title, content, primary_keyword)
        }))
        .unwrap_or_else(|_| {
            error!("analysis pipeline panicked, returning degraded result");
            degraded_result(content, &self.thresholds)
        })
    }

    fn run_pipeline(
        &self,
        title: &str,
        content: &str,
        primary_keyword: &str,
    ) -> ContentAnalysisResult {
        let normalized = text::normalize(content);
        let fingerprint = fingerprint::fingerprint(&normalized.plain_text);

        let candidates =
            matcher::find_similar_candidates(self.store, &fingerprint, &normalized.plain_text, title);
        let similar_matches = similarity::score_candidates(
            &normalized.plain_text,
            &candidates,
            self.thresholds.similarity_floor,
        );
        let (uniqueness_score, is_duplicate) =
            uniqueness(&similar_matches, self.thresholds.duplicate_threshold);

        let mut result = ContentAnalysisResult {
            uniqueness_score,
            is_duplicate,
            similar_matches,
            fingerprint,
            keyword_density: stats::keyword_density(&normalized.plain_text, primary_keyword),
            readability_score: stats::readability(&normalized.plain_text),
            word_count: normalized.words.len(),
            recommendations: Vec::new(),
            seo_score: 0,
        };
        result.recommendations =
            recommend::generate_recommendations(&result, primary_keyword, &self.thresholds);
        result.seo_score = seo::seo_score(&result, &self.thresholds);
        result
    }
}

/// Uniqueness score and duplicate flag from scored matches.
///
/// Matches arrive sorted descending, so the first entry carries the maximum.
fn uniqueness(matches: &[SimilarityMatch], duplicate_threshold: f64) -> (i32, bool) {
    matches.first().map_or((100, false), |top| {
        let score = top.score.mul_add(-100.0, 100.0).round() as i32;
        (score, top.score > duplicate_threshold)
    })
}

/// The fixed conservative result returned when the pipeline fails.
///
/// The fingerprint falls back to the rolling checksum and the word count to
/// a plain whitespace split.
fn degraded_result(content: &str, thresholds: &Thresholds) -> ContentAnalysisResult {
    let mut result = ContentAnalysisResult {
        uniqueness_score: DEGRADED_UNIQUENESS,
        is_duplicate: false,
        similar_matches: Vec::new(),
        fingerprint: fingerprint::rolling_checksum(content),
        keyword_density: DEGRADED_KEYWORD_DENSITY,
        readability_score: DEGRADED_READABILITY,
        word_count: content.split_whitespace().count(),
        recommendations: vec![DEGRADED_RECOMMENDATION.to_string()],
        seo_score: 0,
    };
    result.seo_score = seo::seo_score(&result, thresholds);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::store::{CorpusEntry, MemoryCorpus};

    /// Store whose every query fails, simulating a datastore outage.
    struct OutageStore;

    impl CorpusStore for OutageStore {
        fn find_by_fingerprint(&self, _: &str) -> StoreResult<Vec<CorpusEntry>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn find_by_approximate_text(&self, _: &str, _: &str) -> StoreResult<Vec<CorpusEntry>> {
            Err(StoreError::Query("timeout".to_string()))
        }
    }

    /// ~1200 words of varied sentences with a controlled keyword rate.
    fn fresh_article() -> String {
        let mut content = String::new();
        for i in 0..120 {
            if i % 8 == 0 {
                content.push_str(&format!(
                    "Ocean scenes delight young artists with pattern number {i}. "
                ));
            } else {
                content.push_str(&format!(
                    "Children enjoy drawing waves and shells in style {i}. "
                ));
            }
        }
        content
    }

    fn article_entry(content: &str) -> CorpusEntry {
        CorpusEntry {
            id: "existing".to_string(),
            slug: "existing-post".to_string(),
            title: "Existing Post".to_string(),
            content: content.to_string(),
            content_fingerprint: Some(fingerprint::fingerprint(&text::normalize(content).plain_text)),
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let corpus = MemoryCorpus::new(vec![article_entry("Whales migrate across entire oceans every single year.")]);
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let content = fresh_article();
        let first = analyzer.analyze("Ocean Coloring Fun", &content, "ocean");
        let second = analyzer.analyze("Ocean Coloring Fun", &content, "ocean");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn fresh_content_against_empty_corpus() {
        let corpus = MemoryCorpus::default();
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("Ocean Coloring Fun", &fresh_article(), "ocean");

        assert_eq!(result.uniqueness_score, 100);
        assert!(!result.is_duplicate);
        assert!(result.similar_matches.is_empty());
        assert!(result.word_count >= 1000);
        assert!((85..=100).contains(&result.seo_score), "seo {}", result.seo_score);
    }

    #[test]
    fn identical_corpus_entry_is_flagged_duplicate() {
        let content = fresh_article();
        let corpus = MemoryCorpus::new(vec![article_entry(&content)]);
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("Ocean Coloring Fun", &content, "ocean");

        assert!(result.is_duplicate);
        assert_eq!(result.uniqueness_score, 0);
        assert_eq!(result.similar_matches.len(), 1);
        assert_eq!(result.similar_matches[0].score, 1.0);
        assert!(result.recommendations[0].contains("too similar"));
    }

    #[test]
    fn duplicate_implies_match_above_threshold() {
        let content = fresh_article();
        let corpus = MemoryCorpus::new(vec![article_entry(&content)]);
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("Ocean Coloring Fun", &content, "ocean");

        if result.is_duplicate {
            let threshold = Thresholds::default().duplicate_threshold;
            assert!(result.similar_matches.iter().any(|m| m.score > threshold));
        }
    }

    #[test]
    fn datastore_outage_degrades_to_maximal_uniqueness() {
        let analyzer = ContentAnalyzer::new(&OutageStore, Thresholds::default());
        let result = analyzer.analyze("Ocean Coloring Fun", &fresh_article(), "ocean");

        assert!(result.similar_matches.is_empty());
        assert_eq!(result.uniqueness_score, 100);
        assert!(!result.is_duplicate);
    }

    #[test]
    fn empty_input_yields_neutral_statistics() {
        let corpus = MemoryCorpus::default();
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("", "", "");

        assert_eq!(result.word_count, 0);
        assert_eq!(result.keyword_density, 0.0);
        assert_eq!(result.readability_score, 50);
        assert_eq!(result.uniqueness_score, 100);
        assert!(!result.is_duplicate);
    }

    #[test]
    fn similar_matches_sorted_descending() {
        // Both entries lack fingerprints, so they arrive via the text-search
        // fallback (shared title prefix) and must come back sorted.
        let content = fresh_article();
        let near_copy = content.replace("waves", "ripples").replace("shells", "stones");
        let corpus = MemoryCorpus::new(vec![
            CorpusEntry {
                id: "near".to_string(),
                slug: "near".to_string(),
                title: "Ocean Coloring Near".to_string(),
                content: near_copy,
                content_fingerprint: None,
            },
            CorpusEntry {
                id: "exact".to_string(),
                slug: "exact".to_string(),
                title: "Ocean Coloring Exact".to_string(),
                content: content.clone(),
                content_fingerprint: None,
            },
        ]);
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("Ocean Coloring", &content, "ocean");

        assert_eq!(result.similar_matches.len(), 2);
        assert_eq!(result.similar_matches[0].id, "exact");
        for pair in result.similar_matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn markup_is_ignored_for_statistics() {
        let corpus = MemoryCorpus::default();
        let analyzer = ContentAnalyzer::new(&corpus, Thresholds::default());
        let result = analyzer.analyze("T", "<p>three little words</p>", "little");
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn degraded_result_shape() {
        let result = degraded_result("a few plain words", &Thresholds::default());
        assert_eq!(result.uniqueness_score, 85);
        assert!(!result.is_duplicate);
        assert!(result.similar_matches.is_empty());
        assert_eq!(result.readability_score, 70);
        assert_eq!(result.word_count, 4);
        assert_eq!(result.recommendations.len(), 1);
        assert!(!result.fingerprint.is_empty());
        assert!((0..=100).contains(&result.seo_score));
    }
}
