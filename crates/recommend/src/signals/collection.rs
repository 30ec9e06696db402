//! Signal for videos that belong together.
//!
//! Binary: a candidate either shares a collection (or a series) with the
//! current video or it doesn't.

use crate::context::ScoringContext;
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;

/// Scores 1 for collection co-members and same-series videos.
pub struct CollectionSignal;

impl Signal for CollectionSignal {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.collection
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        let same_series = match (context.current.series(), candidate.series()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        if same_series || context.shares_collection(candidate) {
            1.0
        } else {
            0.0
        }
    }
}
