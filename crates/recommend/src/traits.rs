//! Core trait for recommendation signals.
//!
//! A signal looks at one candidate against the scoring context and returns
//! a raw score in `[0, 1]`. The pipeline multiplies it by the signal's
//! weight and sums the results.

use crate::context::ScoringContext;
use crate::weights::RecommendationWeights;
use library::Video;

/// One independent reason to recommend a video.
///
/// `Send + Sync` so candidates can be scored in parallel.
pub trait Signal: Send + Sync {
    /// Returns the name of this signal (for logging and explanations)
    fn name(&self) -> &'static str;

    /// Which coefficient in `weights` applies to this signal
    fn weight(&self, weights: &RecommendationWeights) -> f64;

    /// Unweighted score for `candidate`, expected in `[0, 1]`.
    ///
    /// Missing data means 0, never a panic.
    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64;
}
