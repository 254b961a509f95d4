use crate::sentiment_analysis::domain::RawClassification;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// TransformerScorer port for the 3-class neural sentiment classifier
///
/// Implementations return the classifier's raw label code and score; mapping
/// labels to sentiments and applying the low-confidence override is domain
/// policy, not adapter work.
#[async_trait]
pub trait TransformerScorer: Send + Sync {
    /// Classifies a single (already normalized) review text
    ///
    /// # Returns
    /// The top label code (e.g. `LABEL_2`) and its score in [0, 1]
    ///
    /// # Errors
    /// Returns `SentimentError::UpstreamUnavailable` when the model cannot be reached
    async fn classify(&self, text: &str) -> Result<RawClassification>;
}

#[async_trait]
impl<S: TransformerScorer + ?Sized> TransformerScorer for Arc<S> {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        (**self).classify(text).await
    }
}
