use super::steps;
use crate::application::dto::CompareRequest;
use crate::ports::outbound::{LexiconScorer, ProgressReporter, ReviewSource, TransformerScorer};
use crate::sentiment_analysis::domain::{AppQuery, ComparisonResult};
use crate::sentiment_analysis::services::Comparator;
use crate::shared::error::SentimentError;
use crate::shared::Result;

const BOTH_NAMES_REQUIRED: &str = "Both app names are required";

/// CompareAppsUseCase - side-by-side review sentiment for two apps
///
/// Both names are validated before any fetch, both review sets are fetched
/// concurrently, and the comparison only runs when both sets are non-empty.
///
/// # Type Parameters
/// * `RS` - ReviewSource implementation
/// * `L` - LexiconScorer implementation
/// * `T` - TransformerScorer implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareAppsUseCase<RS, L, T, PR> {
    review_source: RS,
    comparator: Comparator<L, T>,
    progress_reporter: PR,
}

impl<RS, L, T, PR> CompareAppsUseCase<RS, L, T, PR>
where
    RS: ReviewSource,
    L: LexiconScorer,
    T: TransformerScorer,
    PR: ProgressReporter,
{
    /// Creates a new CompareAppsUseCase with injected dependencies
    pub fn new(review_source: RS, comparator: Comparator<L, T>, progress_reporter: PR) -> Self {
        Self {
            review_source,
            comparator,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Errors
    /// - `SentimentError::MissingInput` if either app name is blank
    /// - `SentimentError::NoReviewsFound` if either app has no reviews
    /// - `SentimentError::UpstreamUnavailable` if the review source or a scorer fails
    pub async fn execute(&self, request: CompareRequest) -> Result<ComparisonResult> {
        // Step 1: Validate both names before touching any external service
        let query1 = AppQuery::new(&request.app1, BOTH_NAMES_REQUIRED)?;
        let query2 = AppQuery::new(&request.app2, BOTH_NAMES_REQUIRED)?;
        steps::validate_review_count(request.review_count)?;

        // Step 2: Fetch both review sets concurrently
        let (reviews1, reviews2) = futures::try_join!(
            steps::fetch_reviews(
                &self.review_source,
                &self.progress_reporter,
                &query1,
                request.review_count
            ),
            steps::fetch_reviews(
                &self.review_source,
                &self.progress_reporter,
                &query2,
                request.review_count
            )
        )?;

        if reviews1.is_empty() || reviews2.is_empty() {
            return Err(SentimentError::no_reviews("One or both apps have no reviews").into());
        }

        // Step 3: Score each side once, then compare
        let aggregator = self.comparator.aggregator();
        let scored1 =
            steps::score_reviews(aggregator, &self.progress_reporter, &query1, &reviews1).await?;
        let scored2 =
            steps::score_reviews(aggregator, &self.progress_reporter, &query2, &reviews2).await?;

        let comparison = self
            .comparator
            .compare_scored((query1.as_str(), &scored1), (query2.as_str(), &scored2));

        self.progress_reporter.report_completion(&format!(
            "📊 {}: {} vs {}: {}",
            comparison.app1().name(),
            comparison.app1().result().transformer().sentiment,
            comparison.app2().name(),
            comparison.app2().result().transformer().sentiment
        ));

        Ok(comparison)
    }
}
