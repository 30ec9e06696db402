//! Signal for recently played videos.
//!
//! A video played just now scores 1, one played a year or more ago
//! scores 0, with a linear decay in between.

use crate::context::{ONE_YEAR_MS, ScoringContext};
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;

/// Scores candidates by how recently they were last played.
pub struct RecencySignal;

impl Signal for RecencySignal {
    fn name(&self) -> &'static str {
        "recency"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.recency
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        let Some(last_played) = candidate.last_played_at else {
            return 0.0;
        };
        // Clock skew can put playback in the future; treat that as "just now"
        let age = context.now_ms.saturating_sub(last_played).max(0) as f64;
        (1.0 - age / ONE_YEAR_MS).max(0.0)
    }
}
