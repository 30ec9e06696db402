//! Per-call scoring context.
//!
//! Everything a signal needs that depends on the whole library rather than
//! on a single candidate is computed here once: the view-count normalizer,
//! the next video in natural order, and the set of videos sharing a
//! collection with the current one.

use crate::weights::RecommendationWeights;
use library::{Collection, Video, natural_cmp};
use std::collections::HashSet;

/// Milliseconds in a 365-day year; recency decays to zero over this span
pub const ONE_YEAR_MS: f64 = 365.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Read-only facts about the current video and the library it lives in
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    pub current: &'a Video,
    pub weights: RecommendationWeights,
    /// Wall clock for recency, epoch milliseconds
    pub now_ms: i64,
    /// Largest view count in the library, never below 1
    pub max_view_count: f64,
    /// Id of the video right after `current` in natural filename order
    pub next_in_sequence: Option<&'a str>,
    /// Tags on the current video
    pub current_tags: HashSet<&'a str>,
    /// Every video that shares at least one collection with `current`
    co_members: HashSet<&'a str>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        current: &'a Video,
        all_videos: &'a [Video],
        collections: &'a [Collection],
        weights: RecommendationWeights,
        now_ms: i64,
    ) -> Self {
        let max_view_count = all_videos.iter().map(Video::views).fold(1.0, f64::max);

        Self {
            current,
            weights,
            now_ms,
            max_view_count,
            next_in_sequence: next_in_sequence(current, all_videos),
            current_tags: current.tag_set(),
            co_members: co_members(current, collections),
        }
    }

    /// Whether `candidate` appears in any collection with the current video
    pub fn shares_collection(&self, candidate: &Video) -> bool {
        self.co_members.contains(candidate.id.as_str())
    }
}

/// Sort the whole library (current included) in natural order and return
/// the video after the current one. `None` if current is last or absent.
fn next_in_sequence<'a>(current: &Video, all_videos: &'a [Video]) -> Option<&'a str> {
    let mut ordered: Vec<&Video> = all_videos.iter().collect();
    ordered.sort_by(|a, b| natural_cmp(a.sequence_key(), b.sequence_key()));

    let position = ordered.iter().position(|v| v.id == current.id)?;
    ordered.get(position + 1).map(|v| v.id.as_str())
}

fn co_members<'a>(current: &Video, collections: &'a [Collection]) -> HashSet<&'a str> {
    collections
        .iter()
        .filter(|c| c.contains(&current.id))
        .flat_map(|c| c.videos.iter())
        .map(String::as_str)
        .filter(|id| *id != current.id)
        .collect()
}
