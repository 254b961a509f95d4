use super::{ProsConsExtractor, SentimentAggregator};
use crate::ports::outbound::{LexiconScorer, TransformerScorer};
use crate::sentiment_analysis::domain::{
    AppComparison, AppSentiment, ComparisonResult, Review, ScoredReview,
};
use crate::shared::Result;

/// Comparator service running the aggregation on two apps side by side
///
/// Each review is scored once; the aggregate and the pros/cons lists of a
/// side are both derived from that single scoring pass. Callers are expected
/// to reject empty review lists before comparing.
pub struct Comparator<L, T> {
    aggregator: SentimentAggregator<L, T>,
}

impl<L, T> Comparator<L, T>
where
    L: LexiconScorer,
    T: TransformerScorer,
{
    pub fn new(aggregator: SentimentAggregator<L, T>) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &SentimentAggregator<L, T> {
        &self.aggregator
    }

    /// Scores both review sets concurrently and compares them
    pub async fn compare(
        &self,
        app1: (&str, &[Review]),
        app2: (&str, &[Review]),
    ) -> Result<ComparisonResult> {
        let (scored1, scored2) = futures::try_join!(
            self.aggregator.score_reviews(app1.1),
            self.aggregator.score_reviews(app2.1)
        )?;
        Ok(self.compare_scored((app1.0, &scored1), (app2.0, &scored2)))
    }

    /// Pure comparison of already scored review sets
    pub fn compare_scored(
        &self,
        app1: (&str, &[ScoredReview]),
        app2: (&str, &[ScoredReview]),
    ) -> ComparisonResult {
        ComparisonResult::new(self.side(app1.0, app1.1), self.side(app2.0, app2.1))
    }

    fn side(&self, name: &str, scored: &[ScoredReview]) -> AppComparison {
        AppComparison::new(
            AppSentiment::new(name, self.aggregator.summarize(scored)),
            ProsConsExtractor::extract(scored),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment_analysis::domain::comparison_result::NO_PROS_SENTINEL;
    use crate::sentiment_analysis::domain::{LexiconScore, RawClassification, Sentiment};
    use crate::sentiment_analysis::services::AggregatorConfig;
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Reviews containing "good" are positive, "bad" negative, anything else neutral
    struct KeywordScorer;

    #[async_trait]
    impl LexiconScorer for KeywordScorer {
        async fn score(&self, text: &str) -> Result<LexiconScore> {
            if text.contains("good") {
                LexiconScore::new(0.6)
            } else if text.contains("bad") {
                LexiconScore::new(-0.6)
            } else {
                LexiconScore::new(0.0)
            }
        }
    }

    #[async_trait]
    impl TransformerScorer for KeywordScorer {
        async fn classify(&self, text: &str) -> Result<RawClassification> {
            if text.contains("good") {
                RawClassification::new("LABEL_2", 0.9)
            } else if text.contains("bad") {
                RawClassification::new("LABEL_0", 0.9)
            } else {
                RawClassification::new("LABEL_1", 0.9)
            }
        }
    }

    fn comparator() -> Comparator<KeywordScorer, KeywordScorer> {
        let scorer = Arc::new(KeywordScorer);
        let aggregator =
            SentimentAggregator::new(scorer.clone(), scorer, AggregatorConfig::default()).unwrap();
        Comparator::new(aggregator)
    }

    fn reviews(texts: &[&str]) -> Vec<Review> {
        texts.iter().map(|t| Review::new(*t)).collect()
    }

    #[tokio::test]
    async fn test_compare_two_apps() {
        let comparator = comparator();
        let alpha = reviews(&["good one", "good two", "bad one"]);
        let beta = reviews(&["bad a", "bad b", "fine"]);

        let result = comparator
            .compare(("Alpha", &alpha), ("Beta", &beta))
            .await
            .unwrap();

        assert_eq!(result.app1().name(), "Alpha");
        assert_eq!(result.app1().result().transformer().sentiment, Sentiment::Positive);
        assert_eq!(result.app1().pros(), &["good one", "good two"].map(String::from));
        assert_eq!(result.app1().cons(), &["bad one".to_string()]);

        assert_eq!(result.app2().name(), "Beta");
        assert_eq!(result.app2().result().transformer().sentiment, Sentiment::Negative);
        assert_eq!(result.app2().pros(), &[NO_PROS_SENTINEL.to_string()]);
        assert_eq!(result.app2().cons(), &["bad a", "bad b"].map(String::from));
    }

    #[tokio::test]
    async fn test_compare_matches_independent_aggregation() {
        let comparator = comparator();
        let alpha = reviews(&["good", "meh", "bad"]);
        let beta = reviews(&["good"]);

        let result = comparator
            .compare(("Alpha", &alpha), ("Beta", &beta))
            .await
            .unwrap();
        let standalone = comparator.aggregator().aggregate(&alpha).await.unwrap();

        assert_eq!(result.app1().result(), &standalone);
        assert_eq!(result.app1().result().sentiment_counts().total(), 3);
    }

    #[tokio::test]
    async fn test_compare_empty_side_degenerates_to_empty_result() {
        let comparator = comparator();
        let alpha = reviews(&["good"]);

        let result = comparator
            .compare(("Alpha", &alpha), ("Empty", &[]))
            .await
            .unwrap();

        assert!(result.app2().result().note().is_some());
        assert_eq!(result.app2().pros(), &[NO_PROS_SENTINEL.to_string()]);
    }
}
