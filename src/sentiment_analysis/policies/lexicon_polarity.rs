use crate::sentiment_analysis::domain::Sentiment;

/// LexiconPolarity policy for classifying compound scores
///
/// A compound score is Positive at or above `+DEAD_BAND`, Negative at or
/// below `-DEAD_BAND`, and Neutral in between. Both bounds are inclusive.
pub struct LexiconPolarity;

impl LexiconPolarity {
    pub const DEAD_BAND: f64 = 0.05;

    pub fn classify(compound: f64) -> Sentiment {
        if Self::is_positive(compound) {
            Sentiment::Positive
        } else if Self::is_negative(compound) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn is_positive(compound: f64) -> bool {
        compound >= Self::DEAD_BAND
    }

    pub fn is_negative(compound: f64) -> bool {
        compound <= -Self::DEAD_BAND
    }
}
