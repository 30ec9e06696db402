//! Signal implementations for the scoring pipeline.
//!
//! Each signal scores one aspect of how well a candidate follows the
//! current video; `SignalPipeline::with_default_signals` combines them.

pub mod author;
pub mod collection;
pub mod frequency;
pub mod recency;
pub mod sequence;
pub mod tags;

// Re-export for convenience
pub use author::AuthorSignal;
pub use collection::CollectionSignal;
pub use frequency::FrequencySignal;
pub use recency::RecencySignal;
pub use sequence::SequenceSignal;
pub use tags::TagSignal;
