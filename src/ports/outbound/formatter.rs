use crate::application::dto::SentimentReport;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis results
///
/// This port abstracts the output format (JSON, Markdown, ...).
pub trait ReportFormatter {
    /// Formats a single-app or comparison report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &SentimentReport) -> Result<String>;
}
