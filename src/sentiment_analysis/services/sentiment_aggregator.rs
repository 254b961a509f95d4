use crate::ports::outbound::{LexiconScorer, TransformerScorer};
use crate::sentiment_analysis::domain::{
    AggregateResult, LexiconVerdict, Review, ScoredReview, Sentiment, SentimentCounts,
    TransformerVerdict,
};
use crate::sentiment_analysis::policies::{round_to, LexiconPolarity, TransformerLabelPolicy};
use crate::shared::error::SentimentError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::pin::pin;
use std::sync::Arc;

/// Tunable thresholds and limits of the aggregation
///
/// The per-review low-confidence cutoff and the aggregation threshold are
/// independent: a review can keep a Positive/Negative label after the cutoff
/// and still be counted as Neutral because it sits below the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatorConfig {
    /// Minimum per-review confidence for a review to count under its own class
    pub transformer_threshold: f64,
    /// Per-review scores at or below this are forced to Neutral
    pub low_confidence_cutoff: f64,
    /// Maximum number of reviews scored concurrently within one request
    pub max_concurrent_scoring: usize,
}

impl AggregatorConfig {
    pub const DEFAULT_TRANSFORMER_THRESHOLD: f64 = 0.7;
    pub const DEFAULT_MAX_CONCURRENT_SCORING: usize = 4;

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("transformer_threshold", self.transformer_threshold),
            ("low_confidence_cutoff", self.low_confidence_cutoff),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SentimentError::Validation {
                    message: format!("{} must be within [0, 1], got {}", name, value),
                }
                .into());
            }
        }

        if self.max_concurrent_scoring == 0 {
            return Err(SentimentError::Validation {
                message: "max_concurrent_scoring must be at least 1".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            transformer_threshold: Self::DEFAULT_TRANSFORMER_THRESHOLD,
            low_confidence_cutoff: TransformerLabelPolicy::DEFAULT_LOW_CONFIDENCE_CUTOFF,
            max_concurrent_scoring: Self::DEFAULT_MAX_CONCURRENT_SCORING,
        }
    }
}

/// SentimentAggregator service turning a list of reviews into one verdict
///
/// Both scorers are injected and shared; the aggregator itself holds no
/// mutable state, so aggregating the same reviews twice with deterministic
/// scorers yields identical results.
///
/// # Type Parameters
/// * `L` - LexiconScorer implementation
/// * `T` - TransformerScorer implementation
pub struct SentimentAggregator<L, T> {
    lexicon: Arc<L>,
    transformer: Arc<T>,
    config: AggregatorConfig,
    label_policy: TransformerLabelPolicy,
}

impl<L, T> Clone for SentimentAggregator<L, T> {
    fn clone(&self) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            transformer: Arc::clone(&self.transformer),
            config: self.config,
            label_policy: TransformerLabelPolicy::new(self.config.low_confidence_cutoff),
        }
    }
}

impl<L, T> SentimentAggregator<L, T>
where
    L: LexiconScorer,
    T: TransformerScorer,
{
    /// Creates a new aggregator with injected scorers
    ///
    /// # Errors
    /// Returns `SentimentError::Validation` if the config is out of range
    pub fn new(lexicon: Arc<L>, transformer: Arc<T>, config: AggregatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lexicon,
            transformer,
            config,
            label_policy: TransformerLabelPolicy::new(config.low_confidence_cutoff),
        })
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Scores every review and summarizes the scores into one result
    pub async fn aggregate(&self, reviews: &[Review]) -> Result<AggregateResult> {
        if reviews.is_empty() {
            return Ok(AggregateResult::empty());
        }
        let scored = self.score_reviews(reviews).await?;
        Ok(self.summarize(&scored))
    }

    pub async fn score_reviews(&self, reviews: &[Review]) -> Result<Vec<ScoredReview>> {
        self.score_reviews_with_progress(reviews, |_, _| {}).await
    }

    /// Scores reviews with bounded concurrency, preserving input order
    ///
    /// `on_progress(done, total)` is called after each review is scored.
    /// The first scorer failure aborts the whole batch.
    pub async fn score_reviews_with_progress<F>(
        &self,
        reviews: &[Review],
        on_progress: F,
    ) -> Result<Vec<ScoredReview>>
    where
        F: Fn(usize, usize),
    {
        let total = reviews.len();
        let mut scored = Vec::with_capacity(total);

        let mut results = pin!(stream::iter(reviews.iter().cloned())
            .map(|review| self.score_review(review))
            .buffered(self.config.max_concurrent_scoring));

        while let Some(result) = results.next().await {
            scored.push(result?);
            on_progress(scored.len(), total);
        }

        tracing::debug!(total, "scored reviews");
        Ok(scored)
    }

    async fn score_review(&self, review: Review) -> Result<ScoredReview> {
        let text = review.normalized();
        let (lexicon, raw) = futures::try_join!(
            self.lexicon.score(&text),
            self.transformer.classify(&text)
        )?;
        let transformer = self.label_policy.classify(&raw);
        Ok(ScoredReview::new(review, lexicon.compound(), transformer))
    }

    /// Pure summary of already scored reviews
    pub fn summarize(&self, scored: &[ScoredReview]) -> AggregateResult {
        if scored.is_empty() {
            return AggregateResult::empty();
        }

        let total = scored.len() as f64;
        let avg_compound = scored.iter().map(ScoredReview::compound).sum::<f64>() / total;
        let lexicon = LexiconVerdict {
            overall: LexiconPolarity::classify(avg_compound),
            avg_compound,
        };

        let counts = self.count_sentiments(scored);
        let verdict = counts.majority();
        let transformer = TransformerVerdict {
            sentiment: verdict,
            confidence: round_to(counts.get(verdict) as f64 / total, 2),
        };

        let (example_review, example_confidence) = self
            .select_example(scored, verdict)
            .map(|example| {
                (
                    example.review().text().to_string(),
                    round_to(example.transformer().confidence, 2),
                )
            })
            .unwrap_or_default();

        AggregateResult::new(
            lexicon,
            transformer,
            example_review,
            example_confidence,
            counts,
        )
    }

    fn count_sentiments(&self, scored: &[ScoredReview]) -> SentimentCounts {
        let mut counts = SentimentCounts::default();
        for review in scored {
            let transformer = review.transformer();
            if transformer.confidence < self.config.transformer_threshold {
                counts.increment(Sentiment::Neutral);
            } else {
                counts.increment(transformer.sentiment);
            }
        }
        counts
    }

    /// Most confident review agreeing with the verdict above the threshold,
    /// falling back to the most confident review overall
    fn select_example<'a>(
        &self,
        scored: &'a [ScoredReview],
        verdict: Sentiment,
    ) -> Option<&'a ScoredReview> {
        let threshold = self.config.transformer_threshold;
        let agreeing = scored.iter().filter(|review| {
            let transformer = review.transformer();
            transformer.sentiment == verdict && transformer.confidence >= threshold
        });

        most_confident(agreeing).or_else(|| most_confident(scored.iter()))
    }
}

/// Highest-confidence review; the earliest one wins ties
fn most_confident<'a>(reviews: impl Iterator<Item = &'a ScoredReview>) -> Option<&'a ScoredReview> {
    reviews.fold(None, |best, review| match best {
        Some(current) if current.transformer().confidence >= review.transformer().confidence => {
            Some(current)
        }
        _ => Some(review),
    })
}
