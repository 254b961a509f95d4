pub mod aggregate_result;
pub mod app_query;
pub mod comparison_result;
pub mod review;
pub mod scores;
pub mod sentiment;

pub use aggregate_result::{AggregateResult, LexiconVerdict, SentimentCounts, TransformerVerdict};
pub use app_query::AppQuery;
pub use comparison_result::{AppComparison, AppSentiment, ComparisonResult, ProsCons};
pub use review::Review;
pub use scores::{LexiconScore, RawClassification, ScoredReview, TransformerScore};
pub use sentiment::Sentiment;
