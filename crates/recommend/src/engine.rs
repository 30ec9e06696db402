//! # Recommendation Engine
//!
//! Ranks every other video in the library against the video being watched:
//! 1. Build the scoring context once (normalizers, sequence, co-members)
//! 2. Score each candidate through the signal pipeline
//! 3. Sort by score; a run of scores within 0.001 of its best is a tie,
//!    broken by collection membership and then by natural filename order

use crate::context::ScoringContext;
use crate::signal_pipeline::{SignalContribution, SignalPipeline};
use crate::weights::{RecommendationWeights, WeightOverrides};
use chrono::Utc;
use library::{Collection, Video, natural_cmp};
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Scores closer than this are treated as equal
pub const SCORE_TOLERANCE: f64 = 0.001;

/// Everything one recommendation call looks at
#[derive(Debug, Clone)]
pub struct RecommendationRequest<'a> {
    pub current_video: &'a Video,
    pub all_videos: &'a [Video],
    pub collections: &'a [Collection],
    pub weights: WeightOverrides,
    /// Epoch milliseconds used as "now" for recency
    pub now_ms: i64,
}

impl<'a> RecommendationRequest<'a> {
    /// Request with default weights, timed at the current wall clock
    pub fn new(
        current_video: &'a Video,
        all_videos: &'a [Video],
        collections: &'a [Collection],
    ) -> Self {
        Self {
            current_video,
            all_videos,
            collections,
            weights: WeightOverrides::default(),
            now_ms: Utc::now().timestamp_millis(),
        }
    }

    pub fn with_weights(mut self, weights: WeightOverrides) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_now(mut self, now_ms: i64) -> Self {
        self.now_ms = now_ms;
        self
    }
}

/// A candidate with its score and the reasons behind it
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub video: &'a Video,
    pub score: f64,
    /// Shares at least one collection with the current video
    pub in_collection: bool,
    pub contributions: Vec<SignalContribution>,
}

impl ScoredCandidate<'_> {
    /// Human-readable breakdown of the non-zero contributions
    pub fn explanation(&self) -> String {
        let parts: Vec<String> = self
            .contributions
            .iter()
            .filter(|c| c.value > 0.0)
            .map(|c| format!("{} {:.3}", c.signal, c.value))
            .collect();

        if parts.is_empty() {
            "no shared signals".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Scores and ranks candidates with a configurable signal pipeline
pub struct RecommendationEngine {
    pipeline: SignalPipeline,
}

impl RecommendationEngine {
    /// Engine with the default six signals
    pub fn new() -> Self {
        Self {
            pipeline: SignalPipeline::with_default_signals(),
        }
    }

    /// Engine with a custom pipeline
    pub fn with_pipeline(pipeline: SignalPipeline) -> Self {
        Self { pipeline }
    }

    /// Rank every candidate, best first
    #[instrument(skip_all, fields(current = %request.current_video.id, library = request.all_videos.len()))]
    pub fn rank<'a>(&self, request: &RecommendationRequest<'a>) -> Vec<ScoredCandidate<'a>> {
        if request.all_videos.len() <= 1 {
            return Vec::new();
        }

        let current = request.current_video;
        let context = ScoringContext::new(
            current,
            request.all_videos,
            request.collections,
            RecommendationWeights::merged(&request.weights),
            request.now_ms,
        );
        debug!(
            "Scoring context: max views {}, next in sequence {:?}",
            context.max_view_count, context.next_in_sequence
        );

        let candidates: Vec<&Video> = request
            .all_videos
            .iter()
            .filter(|v| v.id != current.id)
            .collect();

        let mut scored: Vec<ScoredCandidate<'a>> = candidates
            .par_iter()
            .map(|&video| {
                let score = self.pipeline.score(video, &context);
                ScoredCandidate {
                    video,
                    score: score.total,
                    in_collection: context.shares_collection(video),
                    contributions: score.contributions,
                }
            })
            .collect();

        order_ranked(&mut scored);

        debug!("Ranked {} candidates", scored.len());
        scored
    }

    /// Ranked candidates as plain videos
    pub fn recommend<'a>(&self, request: &RecommendationRequest<'a>) -> Vec<&'a Video> {
        self.rank(request).into_iter().map(|c| c.video).collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank candidates with the default engine
pub fn rank_candidates<'a>(request: &RecommendationRequest<'a>) -> Vec<ScoredCandidate<'a>> {
    RecommendationEngine::new().rank(request)
}

/// Recommended videos for `request.current_video`, best first.
///
/// Never includes the current video; empty when the library has at most
/// one video.
pub fn get_recommendations<'a>(request: &RecommendationRequest<'a>) -> Vec<&'a Video> {
    RecommendationEngine::new().recommend(request)
}

/// Sort best first. Runs of candidates within `SCORE_TOLERANCE` of the
/// run's top score count as tied and are reordered by `compare_tied`.
fn order_ranked(scored: &mut [ScoredCandidate<'_>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut start = 0;
    while start < scored.len() {
        let top = scored[start].score;
        let end = scored[start..]
            .iter()
            .position(|c| top - c.score > SCORE_TOLERANCE)
            .map_or(scored.len(), |offset| start + offset);
        scored[start..end].sort_by(compare_tied);
        start = end;
    }
}

fn compare_tied(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.in_collection
        .cmp(&a.in_collection)
        .then_with(|| natural_cmp(a.video.sequence_key(), b.video.sequence_key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(videos: &[&Video]) -> Vec<String> {
        videos.iter().map(|v| v.id.clone()).collect()
    }

    #[test]
    fn test_tiny_library_has_no_recommendations() {
        let videos = vec![Video::new("1", "only")];
        let request = RecommendationRequest::new(&videos[0], &videos, &[]);
        assert!(get_recommendations(&request).is_empty());

        let empty: Vec<Video> = Vec::new();
        let request = RecommendationRequest::new(&videos[0], &empty, &[]);
        assert!(get_recommendations(&request).is_empty());
    }

    #[test]
    fn test_excludes_current_video() {
        let videos = vec![Video::new("1", "a"), Video::new("2", "b"), Video::new("3", "c")];
        let request = RecommendationRequest::new(&videos[1], &videos, &[]).with_now(0);

        let recommended = get_recommendations(&request);
        assert_eq!(recommended.len(), 2);
        assert!(recommended.iter().all(|v| v.id != "2"));
    }

    #[test]
    fn test_near_ties_prefer_collection_members() {
        let mut videos = vec![
            Video::new("current", "zzz"),
            Video::new("loose", "aaa"),
            Video::new("member", "bbb"),
        ];
        videos[1].view_count = Some(1.0);
        videos[2].view_count = Some(0.0);
        videos[0].view_count = Some(1000.0);
        let collections = vec![Collection::new("c", "Mix").with_video("current").with_video("member")];

        // collection weight off, so only the tiebreak separates them;
        // "loose" is 0.0001 ahead on frequency, inside the tolerance
        let weights = WeightOverrides::new().with("collection", 0.0).unwrap();
        let request = RecommendationRequest::new(&videos[0], &videos, &collections)
            .with_weights(weights)
            .with_now(0);

        assert_eq!(ids(&get_recommendations(&request)), vec!["member", "loose"]);
    }

    #[test]
    fn test_ties_fall_back_to_natural_order() {
        let videos = vec![
            Video::new("current", "zzz"),
            Video::new("x", "Clip 10"),
            Video::new("y", "Clip 9"),
        ];
        let request = RecommendationRequest::new(&videos[0], &videos, &[]).with_now(0);

        assert_eq!(ids(&get_recommendations(&request)), vec!["y", "x"]);
    }

    #[test]
    fn test_rank_exposes_contributions() {
        let mut videos = vec![Video::new("1", "a"), Video::new("2", "b")];
        videos[0].author = Some("Ferris".to_string());
        videos[1].author = Some("Ferris".to_string());

        let request = RecommendationRequest::new(&videos[0], &videos, &[]).with_now(0);
        let ranked = rank_candidates(&request);

        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].score - 0.6).abs() < 1e-9);
        let explanation = ranked[0].explanation();
        assert!(explanation.contains("author 0.100"));
        assert!(explanation.contains("sequence 0.500"));
    }

    /// Frequency-only weights so a candidate's score is views / max views
    fn frequency_only() -> WeightOverrides {
        WeightOverrides::new()
            .with("collection", 0.0)
            .and_then(|w| w.with("sequence", 0.0))
            .and_then(|w| w.with("frequency", 1.0))
            .unwrap()
    }

    #[test]
    fn test_near_ties_across_rounding_edge() {
        // 0.10049 and 0.10051 straddle a 0.0005 rounding edge but are
        // still only 0.00002 apart
        let mut videos = vec![
            Video::new("current", "zzz"),
            Video::new("loose", "aaa"),
            Video::new("member", "bbb"),
            Video::new("other", "ccc"),
        ];
        videos[0].view_count = Some(100_000.0);
        videos[1].view_count = Some(10_051.0);
        videos[2].view_count = Some(10_049.0);
        videos[3].view_count = Some(0.0);
        let collections = vec![Collection::new("c", "Mix").with_video("current").with_video("member")];

        let request = RecommendationRequest::new(&videos[0], &videos, &collections)
            .with_weights(frequency_only())
            .with_now(0);

        assert_eq!(ids(&get_recommendations(&request)), vec!["member", "loose", "other"]);
    }

    #[test]
    fn test_near_ties_without_collections_use_natural_order() {
        let mut videos = vec![
            Video::new("current", "zzz"),
            Video::new("x", "Clip 10"),
            Video::new("y", "Clip 9"),
        ];
        videos[0].view_count = Some(100_000.0);
        videos[1].view_count = Some(10_051.0);
        videos[2].view_count = Some(10_049.0);

        let request = RecommendationRequest::new(&videos[0], &videos, &[])
            .with_weights(frequency_only())
            .with_now(0);

        let ranked = rank_candidates(&request);
        assert!(ranked[0].score < ranked[1].score);
        assert_eq!(ranked[0].video.id, "y");
        assert_eq!(ranked[1].video.id, "x");
    }

    #[test]
    fn test_tie_runs_are_anchored_at_their_top_score() {
        // 0.3000 / 0.2995 tie, 0.2985 is more than 0.001 below the run's top
        let mut videos = vec![
            Video::new("current", "zzz"),
            Video::new("a", "Clip 3"),
            Video::new("b", "Clip 2"),
            Video::new("c", "Clip 1"),
        ];
        videos[0].view_count = Some(10_000.0);
        videos[1].view_count = Some(3_000.0);
        videos[2].view_count = Some(2_995.0);
        videos[3].view_count = Some(2_985.0);

        let request = RecommendationRequest::new(&videos[0], &videos, &[])
            .with_weights(frequency_only())
            .with_now(0);

        assert_eq!(ids(&get_recommendations(&request)), vec!["b", "a", "c"]);
    }
}
