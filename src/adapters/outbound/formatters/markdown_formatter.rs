use crate::application::dto::SentimentReport;
use crate::ports::outbound::ReportFormatter;
use crate::sentiment_analysis::domain::{AggregateResult, AppComparison, AppSentiment, Sentiment};
use crate::shared::Result;
use chrono::Utc;

/// Markdown table header for the model verdicts
const VERDICT_TABLE_HEADER: &str = "| Model | Verdict | Score |\n";

/// Markdown table separator line for the model verdicts
const VERDICT_TABLE_SEPARATOR: &str = "|-------|---------|-------|\n";

/// Markdown table header for the per-class counts
const COUNTS_TABLE_HEADER: &str = "| Positive | Neutral | Negative | Total |\n";

/// Markdown table separator line for the per-class counts
const COUNTS_TABLE_SEPARATOR: &str = "|----------|---------|----------|-------|\n";

/// MarkdownFormatter adapter for human-readable sentiment reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn sentiment_badge(sentiment: Sentiment) -> &'static str {
        match sentiment {
            Sentiment::Positive => "🟢 Positive",
            Sentiment::Neutral => "⚪ Neutral",
            Sentiment::Negative => "🔴 Negative",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str) {
        output.push_str(&format!("# {}\n\n", title));
        output.push_str(&format!(
            "_Generated: {}_\n\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    fn render_verdicts(&self, output: &mut String, result: &AggregateResult) {
        output.push_str(VERDICT_TABLE_HEADER);
        output.push_str(VERDICT_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| Lexicon | {} | {:.3} avg compound |\n",
            Self::sentiment_badge(result.lexicon().overall),
            result.lexicon().avg_compound
        ));
        output.push_str(&format!(
            "| Transformer | {} | {:.2} of reviews |\n\n",
            Self::sentiment_badge(result.transformer().sentiment),
            result.transformer().confidence
        ));
    }

    fn render_counts(&self, output: &mut String, result: &AggregateResult) {
        let counts = result.sentiment_counts();
        output.push_str(COUNTS_TABLE_HEADER);
        output.push_str(COUNTS_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            counts.get(Sentiment::Positive),
            counts.get(Sentiment::Neutral),
            counts.get(Sentiment::Negative),
            counts.total()
        ));
    }

    fn render_example(&self, output: &mut String, result: &AggregateResult) {
        if result.example_review().is_empty() {
            return;
        }
        output.push_str(&format!(
            "**Example review** (confidence {:.2}):\n\n",
            result.example_confidence()
        ));
        for line in result.example_review().lines() {
            output.push_str(&format!("> {}\n", line));
        }
        output.push('\n');
    }

    fn render_result(&self, output: &mut String, result: &AggregateResult) {
        if let Some(note) = result.note() {
            output.push_str(&format!("_{}_\n\n", note));
        }
        self.render_verdicts(output, result);
        self.render_counts(output, result);
        self.render_example(output, result);
    }

    fn render_list(&self, output: &mut String, heading: &str, items: &[String]) {
        output.push_str(&format!("**{}**\n\n", heading));
        for item in items {
            output.push_str(&format!("- {}\n", item.replace(['\r', '\n'], " ")));
        }
        output.push('\n');
    }

    fn render_single(&self, output: &mut String, app: &AppSentiment) {
        self.render_header(output, &format!("Review Sentiment: {}", app.name()));
        self.render_result(output, app.result());
    }

    fn render_summary_row(&self, output: &mut String, side: &AppComparison) {
        let result = side.result();
        output.push_str(&format!(
            "| {} | {} | {:.2} | {} | {:.3} |\n",
            Self::escape_table_cell(side.name()),
            Self::sentiment_badge(result.transformer().sentiment),
            result.transformer().confidence,
            Self::sentiment_badge(result.lexicon().overall),
            result.lexicon().avg_compound
        ));
    }

    fn render_side(&self, output: &mut String, side: &AppComparison) {
        output.push_str(&format!("## {}\n\n", side.name()));
        self.render_result(output, side.result());
        self.render_list(output, "Pros", side.pros());
        self.render_list(output, "Cons", side.cons());
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &SentimentReport) -> Result<String> {
        let mut output = String::new();

        match report {
            SentimentReport::Single(app) => self.render_single(&mut output, app),
            SentimentReport::Comparison(comparison) => {
                self.render_header(
                    &mut output,
                    &format!(
                        "Review Sentiment: {} vs {}",
                        comparison.app1().name(),
                        comparison.app2().name()
                    ),
                );
                output.push_str("## Summary\n\n");
                output.push_str("| App | Transformer | Share | Lexicon | Avg Compound |\n");
                output.push_str("|-----|-------------|-------|---------|--------------|\n");
                self.render_summary_row(&mut output, comparison.app1());
                self.render_summary_row(&mut output, comparison.app2());
                output.push('\n');
                self.render_side(&mut output, comparison.app1());
                self.render_side(&mut output, comparison.app2());
            }
        }

        Ok(output)
    }
}
