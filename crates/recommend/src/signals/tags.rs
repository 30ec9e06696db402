//! Signal for topical similarity via tags.

use crate::context::ScoringContext;
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;
use std::collections::HashSet;

/// Scores candidates by Jaccard similarity of their tags with the current video.
///
/// ## Algorithm
/// Jaccard similarity = |intersection| / |union|, 0 when either side has no tags
pub struct TagSignal;

impl Signal for TagSignal {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.tags
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        let candidate_tags = candidate.tag_set();
        jaccard(&context.current_tags, &candidate_tags)
    }
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}
