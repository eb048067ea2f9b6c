//! Composite SEO scoring.
//!
//! A weighted blend of the individual signals, computed over an
//! already-analyzed result:
//! - Uniqueness: 30%
//! - Readability: 20%
//! - Keyword-density fit: 15%
//! - Word-count fit: 15%
//! - Recommendation-count penalty: 20%
//!
//! The two fit functions are triangular: 100 inside the ideal band, linear
//! decay outside it, floored at 0.

use crate::config::Thresholds;
use crate::report::ContentAnalysisResult;

const UNIQUENESS_WEIGHT: f64 = 0.30;
const READABILITY_WEIGHT: f64 = 0.20;
const KEYWORD_DENSITY_WEIGHT: f64 = 0.15;
const WORD_COUNT_WEIGHT: f64 = 0.15;
const RECOMMENDATIONS_WEIGHT: f64 = 0.20;

/// Density decay per percentage point above the ideal band.
const DENSITY_DECAY: f64 = 20.0;

/// Word-count decay per word above the ideal band, as a divisor.
const WORD_DECAY_DIVISOR: f64 = 20.0;

/// Points deducted per outstanding recommendation.
const RECOMMENDATION_PENALTY: f64 = 20.0;

/// Compute the composite SEO score for an analysis result.
///
/// Pure over the result; callers can re-score after editing recommendations.
pub fn seo_score(result: &ContentAnalysisResult, thresholds: &Thresholds) -> i32 {
    let recommendation_score =
        (100.0 - result.recommendations.len() as f64 * RECOMMENDATION_PENALTY).max(0.0);

    let score = f64::from(result.uniqueness_score) * UNIQUENESS_WEIGHT
        + f64::from(result.readability_score) * READABILITY_WEIGHT
        + keyword_density_fit(result.keyword_density, thresholds) * KEYWORD_DENSITY_WEIGHT
        + word_count_fit(result.word_count, thresholds) * WORD_COUNT_WEIGHT
        + recommendation_score * RECOMMENDATIONS_WEIGHT;

    score.round() as i32
}

/// 100 inside the ideal density band, linear decay to 0 outside.
fn keyword_density_fit(density: f64, thresholds: &Thresholds) -> f64 {
    if density < thresholds.keyword_density_min {
        (density / thresholds.keyword_density_min * 100.0).max(0.0)
    } else if density > thresholds.keyword_density_max {
        ((thresholds.keyword_density_max - density).mul_add(DENSITY_DECAY, 100.0)).max(0.0)
    } else {
        100.0
    }
}

/// 100 inside the ideal length band, linear decay to 0 outside.
fn word_count_fit(words: usize, thresholds: &Thresholds) -> f64 {
    let words = words as f64;
    let min = thresholds.word_count_min as f64;
    let max = thresholds.word_count_max as f64;
    if words < min {
        words / min * 100.0
    } else if words > max {
        (100.0 - (words - max) / WORD_DECAY_DIVISOR).max(0.0)
    } else {
        100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(
        uniqueness: i32,
        readability: i32,
        density: f64,
        words: usize,
        rec_count: usize,
    ) -> ContentAnalysisResult {
        ContentAnalysisResult {
            uniqueness_score: uniqueness,
            is_duplicate: false,
            similar_matches: Vec::new(),
            fingerprint: String::new(),
            keyword_density: density,
            readability_score: readability,
            word_count: words,
            recommendations: vec!["fix it".to_string(); rec_count],
            seo_score: 0,
        }
    }

    #[test]
    fn ideal_content_scores_100() {
        let r = result(100, 100, 1.5, 1500, 0);
        assert_eq!(seo_score(&r, &Thresholds::default()), 100);
    }

    #[test]
    fn fresh_unique_content_scores_high() {
        // 1200 words, density 1.2%, readability 75, no matches, no recommendations.
        let r = result(100, 75, 1.2, 1200, 0);
        let score = seo_score(&r, &Thresholds::default());
        assert!((85..=100).contains(&score), "got {score}");
    }

    #[test]
    fn density_fit_ramps_below_band() {
        let t = Thresholds::default();
        assert_eq!(keyword_density_fit(0.0, &t), 0.0);
        assert_eq!(keyword_density_fit(0.25, &t), 50.0);
        assert_eq!(keyword_density_fit(0.5, &t), 100.0);
        assert_eq!(keyword_density_fit(3.0, &t), 100.0);
    }

    #[test]
    fn density_fit_decays_above_band() {
        let t = Thresholds::default();
        assert_eq!(keyword_density_fit(4.0, &t), 80.0);
        assert_eq!(keyword_density_fit(8.0, &t), 0.0);
        assert_eq!(keyword_density_fit(20.0, &t), 0.0);
    }

    #[test]
    fn word_fit_ramps_below_band() {
        let t = Thresholds::default();
        assert_eq!(word_count_fit(0, &t), 0.0);
        assert_eq!(word_count_fit(400, &t), 50.0);
        assert_eq!(word_count_fit(800, &t), 100.0);
        assert_eq!(word_count_fit(3000, &t), 100.0);
    }

    #[test]
    fn word_fit_decays_above_band() {
        let t = Thresholds::default();
        assert_eq!(word_count_fit(3400, &t), 80.0);
        assert_eq!(word_count_fit(5000, &t), 0.0);
        assert_eq!(word_count_fit(9000, &t), 0.0);
    }

    #[test]
    fn each_recommendation_costs_20_penalty_points() {
        let t = Thresholds::default();
        let base = seo_score(&result(100, 100, 1.5, 1500, 0), &t);
        let one = seo_score(&result(100, 100, 1.5, 1500, 1), &t);
        let five = seo_score(&result(100, 100, 1.5, 1500, 5), &t);
        let six = seo_score(&result(100, 100, 1.5, 1500, 6), &t);
        assert_eq!(base - one, 4); // 20 penalty points at 20% weight
        assert_eq!(base - five, 20); // penalty floor reached
        assert_eq!(five, six); // floored at 0, cannot go lower
    }

    #[test]
    fn score_stays_in_range() {
        let t = Thresholds::default();
        assert_eq!(seo_score(&result(0, 0, 0.0, 0, 7), &t), 0);
        assert!((0..=100).contains(&seo_score(&result(85, 70, 1.0, 600, 1), &t)));
    }
}
