use super::AnalyzeRequest;

/// CompareRequest - request DTO for the two-app comparison use case
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub app1: String,
    pub app2: String,
    /// Maximum number of reviews to fetch per app
    pub review_count: usize,
}

impl CompareRequest {
    pub fn new(app1: impl Into<String>, app2: impl Into<String>) -> Self {
        Self {
            app1: app1.into(),
            app2: app2.into(),
            review_count: AnalyzeRequest::DEFAULT_REVIEW_COUNT,
        }
    }

    pub fn with_review_count(mut self, review_count: usize) -> Self {
        self.review_count = review_count;
        self
    }
}
