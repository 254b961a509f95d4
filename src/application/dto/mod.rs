/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results/errors out to the
/// driving adapters, keeping the domain layer isolated.
mod analyze_request;
mod compare_request;
mod error_response;
mod output_format;
mod sentiment_report;

pub use analyze_request::AnalyzeRequest;
pub use compare_request::CompareRequest;
pub use error_response::ErrorResponse;
pub use output_format::OutputFormat;
pub use sentiment_report::SentimentReport;
