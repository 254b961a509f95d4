use super::steps;
use crate::application::dto::AnalyzeRequest;
use crate::ports::outbound::{LexiconScorer, ProgressReporter, ReviewSource, TransformerScorer};
use crate::sentiment_analysis::domain::{AppQuery, AppSentiment};
use crate::sentiment_analysis::services::SentimentAggregator;
use crate::shared::error::SentimentError;
use crate::shared::Result;

/// AnalyzeAppUseCase - overall review sentiment for a single app
///
/// Validates the app name, fetches its reviews and aggregates them.
/// The result is all-or-nothing: any failure is returned as an error and
/// no partial result is produced.
///
/// # Type Parameters
/// * `RS` - ReviewSource implementation
/// * `L` - LexiconScorer implementation
/// * `T` - TransformerScorer implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeAppUseCase<RS, L, T, PR> {
    review_source: RS,
    aggregator: SentimentAggregator<L, T>,
    progress_reporter: PR,
}

impl<RS, L, T, PR> AnalyzeAppUseCase<RS, L, T, PR>
where
    RS: ReviewSource,
    L: LexiconScorer,
    T: TransformerScorer,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeAppUseCase with injected dependencies
    pub fn new(
        review_source: RS,
        aggregator: SentimentAggregator<L, T>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            review_source,
            aggregator,
            progress_reporter,
        }
    }

    /// Executes the single-app analysis
    ///
    /// # Errors
    /// - `SentimentError::MissingInput` if the app name is blank
    /// - `SentimentError::NoReviewsFound` if the review source returns nothing
    /// - `SentimentError::UpstreamUnavailable` if the review source or a scorer fails
    pub async fn execute(&self, request: AnalyzeRequest) -> Result<AppSentiment> {
        // Step 1: Validate input before touching any external service
        let query = AppQuery::new(&request.app_name, "No app name provided")?;
        steps::validate_review_count(request.review_count)?;

        // Step 2: Fetch reviews
        let reviews = steps::fetch_reviews(
            &self.review_source,
            &self.progress_reporter,
            &query,
            request.review_count,
        )
        .await?;

        if reviews.is_empty() {
            return Err(SentimentError::no_reviews(format!("No reviews found for {}", query)).into());
        }

        // Step 3: Score and aggregate
        let scored =
            steps::score_reviews(&self.aggregator, &self.progress_reporter, &query, &reviews)
                .await?;
        let result = self.aggregator.summarize(&scored);

        self.progress_reporter.report_completion(&format!(
            "📊 {}: {} overall ({} of {} reviews)",
            query,
            result.transformer().sentiment,
            result
                .sentiment_counts()
                .get(result.transformer().sentiment),
            result.sentiment_counts().total()
        ));

        Ok(AppSentiment::new(query.as_str(), result))
    }
}
