use super::{Review, Sentiment};
use crate::shared::Result;

/// Lexicon scorer output. Only `compound` feeds the aggregation; the
/// polarity proportions are kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScore {
    compound: f64,
    positive: f64,
    neutral: f64,
    negative: f64,
}

impl LexiconScore {
    /// # Errors
    /// Returns an error if `compound` is not a finite value in [-1, 1]
    pub fn new(compound: f64) -> Result<Self> {
        Self::with_polarities(compound, 0.0, 0.0, 0.0)
    }

    pub fn with_polarities(compound: f64, positive: f64, neutral: f64, negative: f64) -> Result<Self> {
        if !compound.is_finite() || !(-1.0..=1.0).contains(&compound) {
            anyhow::bail!("Compound score must be within [-1, 1], got {}", compound);
        }
        Ok(Self {
            compound,
            positive,
            neutral,
            negative,
        })
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn positive(&self) -> f64 {
        self.positive
    }

    pub fn neutral(&self) -> f64 {
        self.neutral
    }

    pub fn negative(&self) -> f64 {
        self.negative
    }
}

/// Raw transformer classifier output: one of the model's label codes plus its score
#[derive(Debug, Clone, PartialEq)]
pub struct RawClassification {
    label: String,
    score: f64,
}

impl RawClassification {
    /// # Errors
    /// Returns an error if `score` is not a finite value in [0, 1]
    pub fn new(label: impl Into<String>, score: f64) -> Result<Self> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            anyhow::bail!("Classifier score must be within [0, 1], got {}", score);
        }
        Ok(Self {
            label: label.into(),
            score,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Per-review transformer classification after the low-confidence override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformerScore {
    /// Sentiment after the low-confidence override
    pub sentiment: Sentiment,
    /// Classifier score rounded to 3 decimals
    pub confidence: f64,
    /// Sentiment mapped from the raw label, before the override
    pub label: Sentiment,
}

/// One review scored by both models in a single pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReview {
    review: Review,
    compound: f64,
    transformer: TransformerScore,
}

impl ScoredReview {
    pub fn new(review: Review, compound: f64, transformer: TransformerScore) -> Self {
        Self {
            review,
            compound,
            transformer,
        }
    }

    pub fn review(&self) -> &Review {
        &self.review
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn transformer(&self) -> &TransformerScore {
        &self.transformer
    }
}
