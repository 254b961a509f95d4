/// AnalyzeRequest - request DTO for the single-app analysis use case
///
/// The app name is kept raw; trimming and blank checks happen in the use case.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Free-text app name as typed by the user
    pub app_name: String,
    /// Maximum number of reviews to fetch
    pub review_count: usize,
}

impl AnalyzeRequest {
    pub const DEFAULT_REVIEW_COUNT: usize = 50;

    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            review_count: Self::DEFAULT_REVIEW_COUNT,
        }
    }

    pub fn with_review_count(mut self, review_count: usize) -> Self {
        self.review_count = review_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_review_count() {
        let request = AnalyzeRequest::new("Spotify");
        assert_eq!(request.app_name, "Spotify");
        assert_eq!(request.review_count, 50);
    }

    #[test]
    fn test_with_review_count() {
        let request = AnalyzeRequest::new("Spotify").with_review_count(10);
        assert_eq!(request.review_count, 10);
    }
}
