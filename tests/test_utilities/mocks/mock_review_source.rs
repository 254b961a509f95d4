use async_trait::async_trait;
use review_sentiment::prelude::*;
use review_sentiment::shared::error::SentimentError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ReviewSource serving canned reviews per app name
#[derive(Default)]
pub struct MockReviewSource {
    reviews: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockReviewSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(mut self, app: &str, reviews: &[&str]) -> Self {
        self.reviews.insert(
            app.to_string(),
            reviews.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    pub fn with_failure(mut self, app: &str) -> Self {
        self.failing.insert(app.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewSource for MockReviewSource {
    async fn fetch_reviews(&self, query: &AppQuery, count: usize) -> Result<Vec<Review>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(query.as_str()) {
            return Err(SentimentError::upstream("Review service", "connection refused").into());
        }

        Ok(self
            .reviews
            .get(query.as_str())
            .map(|reviews| reviews.iter().take(count).map(Review::new).collect())
            .unwrap_or_default())
    }
}
