use crate::ports::outbound::{LexiconScorer, TransformerScorer};
use crate::sentiment_analysis::domain::{LexiconScore, RawClassification};
use crate::shared::error::SentimentError;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// PooledScorer decorator bounding concurrent calls into a scorer
///
/// Wraps a LexiconScorer and/or TransformerScorer. At most `max_concurrent`
/// calls reach the inner scorer at any time; the rest wait for a permit.
/// This follows the Decorator pattern so any scorer can be pooled without
/// changing its implementation.
pub struct PooledScorer<S> {
    inner: S,
    permits: Arc<Semaphore>,
}

impl<S> PooledScorer<S> {
    pub fn new(inner: S, max_concurrent: usize) -> Result<Self> {
        if max_concurrent == 0 {
            return Err(SentimentError::Validation {
                message: "max_concurrent_scoring must be at least 1".to_string(),
            }
            .into());
        }
        Ok(Self {
            inner,
            permits: Arc::new(Semaphore::new(max_concurrent)),
        })
    }

    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}

#[async_trait]
impl<S: LexiconScorer> LexiconScorer for PooledScorer<S> {
    async fn score(&self, text: &str) -> Result<LexiconScore> {
        let _permit = self.permits.acquire().await?;
        self.inner.score(text).await
    }
}

#[async_trait]
impl<S: TransformerScorer> TransformerScorer for PooledScorer<S> {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        let _permit = self.permits.acquire().await?;
        self.inner.classify(text).await
    }
}
