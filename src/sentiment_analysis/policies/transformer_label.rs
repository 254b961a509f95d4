use super::round_to;
use crate::sentiment_analysis::domain::{RawClassification, Sentiment, TransformerScore};

/// TransformerLabelPolicy for turning raw classifier output into a per-review score
///
/// Rules, in order:
/// 1. Map the raw label code to a sentiment (`LABEL_0`/`negative` → Negative,
///    `LABEL_1`/`neutral` → Neutral, `LABEL_2`/`positive` → Positive,
///    anything else → Neutral)
/// 2. If the raw score is at or below the low-confidence cutoff, the
///    per-review sentiment is forced to Neutral
/// 3. The confidence is the raw score rounded to 3 decimals
pub struct TransformerLabelPolicy {
    low_confidence_cutoff: f64,
}

impl TransformerLabelPolicy {
    pub const DEFAULT_LOW_CONFIDENCE_CUTOFF: f64 = 0.55;

    pub fn new(low_confidence_cutoff: f64) -> Self {
        Self {
            low_confidence_cutoff,
        }
    }

    pub fn low_confidence_cutoff(&self) -> f64 {
        self.low_confidence_cutoff
    }

    pub fn map_label(label: &str) -> Sentiment {
        match label.trim().to_ascii_lowercase().as_str() {
            "label_0" | "negative" => Sentiment::Negative,
            "label_1" | "neutral" => Sentiment::Neutral,
            "label_2" | "positive" => Sentiment::Positive,
            _ => Sentiment::Neutral,
        }
    }

    pub fn classify(&self, raw: &RawClassification) -> TransformerScore {
        let label = Self::map_label(raw.label());
        let sentiment = if raw.score() <= self.low_confidence_cutoff {
            Sentiment::Neutral
        } else {
            label
        };

        TransformerScore {
            sentiment,
            confidence: round_to(raw.score(), 3),
            label,
        }
    }
}

impl Default for TransformerLabelPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW_CONFIDENCE_CUTOFF)
    }
}
