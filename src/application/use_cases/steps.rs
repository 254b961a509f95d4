//! Steps shared by the analyze and compare use cases.

use crate::ports::outbound::{LexiconScorer, ProgressReporter, ReviewSource, TransformerScorer};
use crate::sentiment_analysis::domain::{AppQuery, Review, ScoredReview};
use crate::sentiment_analysis::services::SentimentAggregator;
use crate::shared::error::SentimentError;
use crate::shared::Result;
use anyhow::Context;

pub(super) fn validate_review_count(review_count: usize) -> Result<()> {
    if review_count == 0 {
        return Err(SentimentError::Validation {
            message: "Review count must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Fetches reviews for one app, reporting what was found
pub(super) async fn fetch_reviews<RS, PR>(
    review_source: &RS,
    progress_reporter: &PR,
    query: &AppQuery,
    review_count: usize,
) -> Result<Vec<Review>>
where
    RS: ReviewSource,
    PR: ProgressReporter,
{
    progress_reporter.report(&format!("🔍 Fetching reviews for: {}", query));
    tracing::info!(app = %query, review_count, "fetching reviews");

    let reviews = review_source
        .fetch_reviews(query, review_count)
        .await
        .with_context(|| format!("Failed to fetch reviews for {}", query))?;

    progress_reporter.report(&format!("✅ Fetched {} review(s) for {}", reviews.len(), query));
    Ok(reviews)
}

/// Scores reviews for one app with a progress bar
pub(super) async fn score_reviews<L, T, PR>(
    aggregator: &SentimentAggregator<L, T>,
    progress_reporter: &PR,
    query: &AppQuery,
    reviews: &[Review],
) -> Result<Vec<ScoredReview>>
where
    L: LexiconScorer,
    T: TransformerScorer,
    PR: ProgressReporter,
{
    progress_reporter.report(&format!("🧠 Scoring reviews for: {}", query));
    tracing::info!(app = %query, reviews = reviews.len(), "scoring reviews");

    let name = query.as_str();
    let scored = aggregator
        .score_reviews_with_progress(reviews, |done, total| {
            progress_reporter.report_progress(done, total, Some(name))
        })
        .await
        .with_context(|| format!("Failed to score reviews for {}", query))?;

    Ok(scored)
}
