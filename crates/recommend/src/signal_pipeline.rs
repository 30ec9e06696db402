//! The SignalPipeline combines multiple signals into one score.
//!
//! Each signal's raw score is multiplied by its weight and the products
//! are summed. The per-signal products are kept so a ranking can be
//! explained afterwards.

use crate::context::ScoringContext;
use crate::signals::{
    AuthorSignal, CollectionSignal, FrequencySignal, RecencySignal, SequenceSignal, TagSignal,
};
use crate::traits::Signal;
use library::Video;
use serde::Serialize;

/// One signal's weighted share of a candidate's score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalContribution {
    pub signal: &'static str,
    pub value: f64,
}

/// Weighted sum of a candidate's signals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalScore {
    pub total: f64,
    pub contributions: Vec<SignalContribution>,
}

/// Chains signals together into a scoring pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = SignalPipeline::new()
///     .add_signal(CollectionSignal)
///     .add_signal(SequenceSignal);
///
/// let score = pipeline.score(&candidate, &context);
/// ```
pub struct SignalPipeline {
    signals: Vec<Box<dyn Signal>>,
}

impl SignalPipeline {
    /// Create a new empty SignalPipeline.
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    /// The six signals used for library recommendations
    pub fn with_default_signals() -> Self {
        Self::new()
            .add_signal(RecencySignal)
            .add_signal(FrequencySignal)
            .add_signal(CollectionSignal)
            .add_signal(TagSignal)
            .add_signal(AuthorSignal)
            .add_signal(SequenceSignal)
    }

    /// Add a signal to the pipeline (builder pattern).
    pub fn add_signal(mut self, signal: impl Signal + 'static) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    /// Names of the signals in evaluation order
    pub fn signal_names(&self) -> Vec<&'static str> {
        self.signals.iter().map(|s| s.name()).collect()
    }

    /// Score one candidate.
    ///
    /// Zero-weight signals are skipped; they could only add 0.
    pub fn score(&self, candidate: &Video, context: &ScoringContext<'_>) -> SignalScore {
        let mut total = 0.0;
        let mut contributions = Vec::with_capacity(self.signals.len());

        for signal in &self.signals {
            let weight = signal.weight(&context.weights);
            if weight == 0.0 {
                continue;
            }
            let value = signal.raw_score(candidate, context) * weight;
            total += value;
            contributions.push(SignalContribution {
                signal: signal.name(),
                value,
            });
        }

        SignalScore {
            total,
            contributions,
        }
    }
}

impl Default for SignalPipeline {
    fn default() -> Self {
        Self::with_default_signals()
    }
}
