//! Coefficients for the recommendation signals.
//!
//! Callers rarely want to restate all seven weights, so overrides are a
//! separate all-optional struct merged over the defaults per call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight applied to each signal's `[0, 1]` score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationWeights {
    pub recency: f64,
    pub frequency: f64,
    pub collection: f64,
    pub tags: f64,
    pub author: f64,
    /// Not part of the additive score; filename order only breaks ties
    pub filename: f64,
    pub sequence: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            recency: 0.2,
            frequency: 0.1,
            collection: 0.4,
            tags: 0.2,
            author: 0.1,
            filename: 0.0,
            sequence: 0.5,
        }
    }
}

impl RecommendationWeights {
    /// Defaults with `overrides` applied field by field
    pub fn merged(overrides: &WeightOverrides) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<f64>, default: f64| value.map(sanitize).unwrap_or(default);

        Self {
            recency: pick(overrides.recency, defaults.recency),
            frequency: pick(overrides.frequency, defaults.frequency),
            collection: pick(overrides.collection, defaults.collection),
            tags: pick(overrides.tags, defaults.tags),
            author: pick(overrides.author, defaults.author),
            filename: pick(overrides.filename, defaults.filename),
            sequence: pick(overrides.sequence, defaults.sequence),
        }
    }
}

/// Weights must be finite and non-negative
fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Raised when a weight name doesn't match any signal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown weight '{0}' (expected one of: recency, frequency, collection, tags, author, filename, sequence)")]
pub struct UnknownWeightError(pub String);

/// Partial set of weights; `None` keeps the default
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightOverrides {
    pub recency: Option<f64>,
    pub frequency: Option<f64>,
    pub collection: Option<f64>,
    pub tags: Option<f64>,
    pub author: Option<f64>,
    pub filename: Option<f64>,
    pub sequence: Option<f64>,
}

impl WeightOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one weight by name
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), UnknownWeightError> {
        let slot = match name {
            "recency" => &mut self.recency,
            "frequency" => &mut self.frequency,
            "collection" => &mut self.collection,
            "tags" => &mut self.tags,
            "author" => &mut self.author,
            "filename" => &mut self.filename,
            "sequence" => &mut self.sequence,
            _ => return Err(UnknownWeightError(name.to_string())),
        };
        *slot = Some(value);
        Ok(())
    }

    /// Builder-style `set`
    pub fn with(mut self, name: &str, value: f64) -> Result<Self, UnknownWeightError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Fill any field not set here from `other`
    pub fn or(self, other: WeightOverrides) -> Self {
        Self {
            recency: self.recency.or(other.recency),
            frequency: self.frequency.or(other.frequency),
            collection: self.collection.or(other.collection),
            tags: self.tags.or(other.tags),
            author: self.author.or(other.author),
            filename: self.filename.or(other.filename),
            sequence: self.sequence.or(other.sequence),
        }
    }
}
