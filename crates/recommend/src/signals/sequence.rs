//! Signal for "play next" continuity.
//!
//! Episodes and numbered clips are usually watched in filename order, so
//! the video right after the current one gets a boost.

use crate::context::ScoringContext;
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;

/// Scores 1 for the video immediately after the current one in natural order.
pub struct SequenceSignal;

impl Signal for SequenceSignal {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.sequence
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        if context.next_in_sequence == Some(candidate.id.as_str()) {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_next_video_scores() {
        let mut videos = vec![
            Video::new("1", "Part 1"),
            Video::new("2", "Part 2"),
            Video::new("3", "Part 3"),
        ];
        videos[2].video_filename = Some("part_10.mkv".to_string());

        let ctx = ScoringContext::new(&videos[0], &videos, &[], Default::default(), 0);
        assert_eq!(SequenceSignal.raw_score(&videos[1], &ctx), 1.0);
        assert_eq!(SequenceSignal.raw_score(&videos[2], &ctx), 0.0);
    }
}
