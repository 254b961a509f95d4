use crate::application::dto::SentimentReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter rendering reports as pretty-printed JSON
///
/// A single-app report is the bare aggregate object; a comparison is an
/// object with `app1` and `app2`, each carrying `name`, the aggregate fields
/// and the `pros`/`cons` lists.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &SentimentReport) -> Result<String> {
        let json = match report {
            SentimentReport::Single(app) => serde_json::to_string_pretty(app.result()),
            SentimentReport::Comparison(comparison) => serde_json::to_string_pretty(comparison),
        }
        .context("Failed to serialize report to JSON")?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment_analysis::domain::{
        AggregateResult, AppComparison, AppSentiment, ComparisonResult, LexiconVerdict, ProsCons,
        Sentiment, SentimentCounts, TransformerVerdict,
    };
    use serde_json::Value;

    fn sample_result() -> AggregateResult {
        AggregateResult::new(
            LexiconVerdict {
                overall: Sentiment::Positive,
                avg_compound: 0.41,
            },
            TransformerVerdict {
                sentiment: Sentiment::Positive,
                confidence: 0.67,
            },
            "Great app".to_string(),
            0.95,
            SentimentCounts::new(2, 1, 0),
        )
    }

    fn format(report: SentimentReport) -> Value {
        let json = JsonFormatter::new().format(&report).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_single_report_shape() {
        let value = format(AppSentiment::new("Notes", sample_result()).into());

        assert_eq!(value["vader"]["overall"], "Positive");
        assert_eq!(value["vader"]["avg_compound"], 0.41);
        assert_eq!(value["roberta"]["sentiment"], "Positive");
        assert_eq!(value["roberta"]["confidence"], 0.67);
        assert_eq!(value["example_review"], "Great app");
        assert_eq!(value["example_confidence"], 0.95);
        assert_eq!(value["sentiment_counts"]["Positive"], 2);
        assert_eq!(value["sentiment_counts"]["Neutral"], 1);
        assert_eq!(value["sentiment_counts"]["Negative"], 0);
        assert!(value.get("note").is_none());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_empty_result_carries_note() {
        let value = format(AppSentiment::new("Ghost", AggregateResult::empty()).into());

        assert_eq!(value["note"], "No reviews found for this app.");
        assert_eq!(value["roberta"]["sentiment"], "Neutral");
    }

    #[test]
    fn test_comparison_report_shape() {
        let side = |name: &str| {
            AppComparison::new(
                AppSentiment::new(name, sample_result()),
                ProsCons::new(vec!["Great app".to_string()], vec![]),
            )
        };
        let value = format(ComparisonResult::new(side("Alpha"), side("Beta")).into());

        assert_eq!(value["app1"]["name"], "Alpha");
        assert_eq!(value["app2"]["name"], "Beta");
        assert_eq!(value["app1"]["roberta"]["sentiment"], "Positive");
        assert_eq!(value["app1"]["pros"][0], "Great app");
        assert_eq!(value["app1"]["cons"][0], "No strong negatives detected");
    }
}
