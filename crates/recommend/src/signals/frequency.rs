//! Signal for frequently watched videos.

use crate::context::ScoringContext;
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;

/// Scores candidates by view count relative to the most-viewed video.
pub struct FrequencySignal;

impl Signal for FrequencySignal {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.frequency
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        candidate.views() / context.max_view_count
    }
}
