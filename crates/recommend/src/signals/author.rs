//! Signal for videos by the same uploader.

use crate::context::ScoringContext;
use crate::traits::Signal;
use crate::weights::RecommendationWeights;
use library::Video;

/// Scores 1 when both videos name the same, non-empty author.
pub struct AuthorSignal;

impl Signal for AuthorSignal {
    fn name(&self) -> &'static str {
        "author"
    }

    fn weight(&self, weights: &RecommendationWeights) -> f64 {
        weights.author
    }

    fn raw_score(&self, candidate: &Video, context: &ScoringContext<'_>) -> f64 {
        match (context.current.author_name(), candidate.author_name()) {
            (Some(a), Some(b)) if a == b => 1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by(id: &str, author: Option<&str>) -> Video {
        let mut video = Video::new(id, id);
        video.author = author.map(str::to_string);
        video
    }

    #[test]
    fn test_author_match() {
        let videos = vec![
            by("1", Some("Ferris")),
            by("2", Some("Ferris")),
            by("3", Some("Corro")),
            by("4", None),
        ];

        let ctx = ScoringContext::new(&videos[0], &videos, &[], Default::default(), 0);
        assert_eq!(AuthorSignal.raw_score(&videos[1], &ctx), 1.0);
        assert_eq!(AuthorSignal.raw_score(&videos[2], &ctx), 0.0);
        assert_eq!(AuthorSignal.raw_score(&videos[3], &ctx), 0.0);
    }

    #[test]
    fn test_empty_authors_do_not_match() {
        let videos = vec![by("1", Some("")), by("2", Some(""))];
        let ctx = ScoringContext::new(&videos[0], &videos, &[], Default::default(), 0);
        assert_eq!(AuthorSignal.raw_score(&videos[1], &ctx), 0.0);
    }
}
