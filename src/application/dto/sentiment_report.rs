use crate::sentiment_analysis::domain::{AppSentiment, ComparisonResult};

/// SentimentReport - what a use case hands to the formatters
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentReport {
    /// Analysis of a single app
    Single(AppSentiment),
    /// Side-by-side comparison of two apps
    Comparison(ComparisonResult),
}

impl From<AppSentiment> for SentimentReport {
    fn from(sentiment: AppSentiment) -> Self {
        SentimentReport::Single(sentiment)
    }
}

impl From<ComparisonResult> for SentimentReport {
    fn from(comparison: ComparisonResult) -> Self {
        SentimentReport::Comparison(comparison)
    }
}
