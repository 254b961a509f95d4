mod comparator;
mod pros_cons_extractor;
mod sentiment_aggregator;

pub use comparator::Comparator;
pub use pros_cons_extractor::ProsConsExtractor;
pub use sentiment_aggregator::{AggregatorConfig, SentimentAggregator};
