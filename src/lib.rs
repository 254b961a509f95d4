//! review-sentiment - review sentiment aggregation for app-store apps
//!
//! This library fetches the reviews of an app, scores each one with a
//! lexicon model and a transformer classifier, and folds the per-review
//! scores into one overall verdict. Two apps can be compared side by side,
//! including short lists of representative pros and cons.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sentiment_analysis`): Pure aggregation rules and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): YAML configuration file and effective settings
//!
//! # Example
//!
//! ```no_run
//! use review_sentiment::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let review_source = ReviewServiceClient::new("http://localhost:3000", "en", "us")?;
//! let lexicon = Arc::new(LexiconServiceClient::new("http://localhost:8000/vader")?);
//! let transformer = Arc::new(HuggingFaceClient::new(
//!     "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment",
//!     std::env::var("HF_API_TOKEN").ok(),
//! )?);
//! let aggregator = SentimentAggregator::new(lexicon, transformer, AggregatorConfig::default())?;
//!
//! // Create and execute the use case
//! let use_case = AnalyzeAppUseCase::new(review_source, aggregator, StderrProgressReporter::new());
//! let sentiment = use_case.execute(AnalyzeRequest::new("Spotify")).await?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&sentiment.into())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sentiment_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        HuggingFaceClient, LexiconServiceClient, PooledScorer, ReviewServiceClient,
    };
    pub use crate::application::dto::{
        AnalyzeRequest, CompareRequest, ErrorResponse, OutputFormat, SentimentReport,
    };
    pub use crate::application::use_cases::{AnalyzeAppUseCase, CompareAppsUseCase};
    pub use crate::ports::outbound::{
        LexiconScorer, OutputPresenter, ProgressReporter, ReportFormatter, ReviewSource,
        TransformerScorer,
    };
    pub use crate::sentiment_analysis::domain::{
        AggregateResult, AppQuery, AppSentiment, ComparisonResult, Review, ScoredReview, Sentiment,
    };
    pub use crate::sentiment_analysis::services::{
        AggregatorConfig, Comparator, ProsConsExtractor, SentimentAggregator,
    };
    pub use crate::shared::Result;
}
