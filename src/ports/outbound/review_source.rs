use crate::sentiment_analysis::domain::{AppQuery, Review};
use crate::shared::Result;
use async_trait::async_trait;

/// ReviewSource port for fetching app reviews
///
/// This port abstracts the external search + review service. A free-text
/// app name is resolved to a canonical app (first search hit wins), then up
/// to `count` review texts are fetched for it.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetches review texts for the app best matching `query`
    ///
    /// # Returns
    /// Reviews in the order the service returned them. Empty when the search
    /// has no match or no review has non-empty content.
    ///
    /// # Errors
    /// Returns `SentimentError::UpstreamUnavailable` when the service fails
    async fn fetch_reviews(&self, query: &AppQuery, count: usize) -> Result<Vec<Review>>;
}
