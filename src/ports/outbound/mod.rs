/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (models, review service, console, files).
pub mod formatter;
pub mod lexicon_scorer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod review_source;
pub mod transformer_scorer;

pub use formatter::ReportFormatter;
pub use lexicon_scorer::LexiconScorer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use review_source::ReviewSource;
pub use transformer_scorer::TransformerScorer;
