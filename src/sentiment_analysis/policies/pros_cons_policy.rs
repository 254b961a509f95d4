use super::LexiconPolarity;
use crate::sentiment_analysis::domain::Sentiment;

/// Which list a review excerpt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Pro,
    Con,
}

/// ProsConsPolicy for classifying a single review as a pro or a con
///
/// Priority order:
/// 1. Pro if the compound score is positive OR the transformer says Positive
/// 2. Con if the compound score is negative OR the transformer says Negative
/// 3. Otherwise the review is in neither list
///
/// A positive compound score therefore wins over a Negative transformer label.
pub struct ProsConsPolicy;

impl ProsConsPolicy {
    pub fn classify(compound: f64, transformer_sentiment: Sentiment) -> Option<Stance> {
        if LexiconPolarity::is_positive(compound) || transformer_sentiment == Sentiment::Positive {
            Some(Stance::Pro)
        } else if LexiconPolarity::is_negative(compound)
            || transformer_sentiment == Sentiment::Negative
        {
            Some(Stance::Con)
        } else {
            None
        }
    }
}
