/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_review_source;
mod mock_scorers;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_review_source::MockReviewSource;
pub use mock_scorers::{MockLexiconScorer, MockTransformerScorer};
