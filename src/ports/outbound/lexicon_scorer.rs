use crate::sentiment_analysis::domain::LexiconScore;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// LexiconScorer port for rule/dictionary based polarity scoring
///
/// This port abstracts the external lexicon model. Implementations are
/// shared across concurrent requests and must not mutate model state
/// while scoring.
#[async_trait]
pub trait LexiconScorer: Send + Sync {
    /// Scores the polarity of a single (already normalized) review text
    ///
    /// # Returns
    /// A LexiconScore whose compound value lies in [-1, 1]
    ///
    /// # Errors
    /// Returns `SentimentError::UpstreamUnavailable` when the model cannot be reached
    async fn score(&self, text: &str) -> Result<LexiconScore>;
}

#[async_trait]
impl<S: LexiconScorer + ?Sized> LexiconScorer for Arc<S> {
    async fn score(&self, text: &str) -> Result<LexiconScore> {
        (**self).score(text).await
    }
}
