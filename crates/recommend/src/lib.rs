//! Recommendations for "what to watch next" in the media library.
//!
//! This crate provides:
//! - Signal trait and six implementations (recency, frequency, collection,
//!   tags, author, sequence)
//! - SignalPipeline for combining weighted signals
//! - RecommendationEngine for scoring and ranking a whole library
//!
//! ## Architecture
//! A recommendation call processes the library in stages:
//! 1. ScoringContext precomputes library-wide facts once
//! 2. SignalPipeline scores each candidate (in parallel)
//! 3. Candidates are ranked by score with deterministic tie-breaks
//!
//! ## Example Usage
//! ```ignore
//! use recommend::{get_recommendations, RecommendationRequest, WeightOverrides};
//!
//! let request = RecommendationRequest::new(current, index.videos(), index.collections())
//!     .with_weights(WeightOverrides::new().with("author", 0.5)?);
//!
//! for video in get_recommendations(&request).iter().take(10) {
//!     println!("{}", video.title);
//! }
//! ```

pub mod context;
pub mod engine;
pub mod signal_pipeline;
pub mod signals;
pub mod traits;
pub mod weights;

// Re-export main types
pub use context::{ONE_YEAR_MS, ScoringContext};
pub use engine::{
    RecommendationEngine, RecommendationRequest, SCORE_TOLERANCE, ScoredCandidate,
    get_recommendations, rank_candidates,
};
pub use signal_pipeline::{SignalContribution, SignalPipeline, SignalScore};
pub use traits::Signal;
pub use weights::{RecommendationWeights, UnknownWeightError, WeightOverrides};
