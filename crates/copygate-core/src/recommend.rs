//! Content improvement recommendations.
//!
//! One human-readable message per violated threshold, evaluated in a fixed
//! order so callers (and tests) can rely on the sequence. The duplicate and
//! overlap checks are mutually exclusive; everything else stacks.

use crate::config::Thresholds;
use crate::report::ContentAnalysisResult;

/// Uniqueness score below which content is flagged for overlap.
const UNIQUENESS_WARNING_FLOOR: i32 = 70;

/// Generate recommendations for each violated threshold.
pub fn generate_recommendations(
    result: &ContentAnalysisResult,
    primary_keyword: &str,
    thresholds: &Thresholds,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if result.is_duplicate {
        recommendations.push(
            "Content appears to be too similar to existing posts. Consider rewriting \
             with a different angle or perspective."
                .to_string(),
        );
    } else if result.uniqueness_score < UNIQUENESS_WARNING_FLOOR {
        recommendations.push(
            "Content has significant overlap with existing posts. Try adding more \
             unique information or examples."
                .to_string(),
        );
    }

    if result.keyword_density < thresholds.keyword_density_min {
        recommendations.push(format!(
            "Increase the usage of primary keyword \"{primary_keyword}\" to improve SEO (aim for 1-2%)."
        ));
    } else if result.keyword_density > thresholds.keyword_density_max {
        recommendations.push(format!(
            "Keyword density for \"{primary_keyword}\" is too high ({:.1}%). Reduce to avoid keyword stuffing.",
            result.keyword_density
        ));
    }

    if result.word_count < thresholds.word_count_min {
        recommendations.push(
            "Content is quite short. Consider expanding to at least 1000 words for \
             better SEO performance."
                .to_string(),
        );
    } else if result.word_count > thresholds.word_count_max {
        recommendations.push(
            "Content is very long. Consider breaking into multiple posts or adding \
             clear subheadings for readability."
                .to_string(),
        );
    }

    if result.readability_score < thresholds.readability_min {
        recommendations.push(
            "Content readability is low. Try using shorter sentences and simpler language."
                .to_string(),
        );
    }

    recommendations
}
