use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish "nothing to analyze"
/// from bad input and from infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the analysis completed
    Success = 0,
    /// The review source returned no reviews for the requested app(s)
    NoReviewsFound = 1,
    /// Invalid command-line arguments or blank app names
    InvalidArguments = 2,
    /// Application error (upstream service failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error propagated out of `run()`
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SentimentError>() {
            Some(SentimentError::MissingInput { .. }) | Some(SentimentError::Validation { .. }) => {
                ExitCode::InvalidArguments
            }
            Some(SentimentError::NoReviewsFound { .. }) => ExitCode::NoReviewsFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoReviewsFound => write!(f, "No Reviews Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for review sentiment analysis.
///
/// Every variant maps to an HTTP-equivalent status code so that any
/// driving adapter can render a structured error response.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("{message}")]
    MissingInput { message: String },

    #[error("{message}\n\n💡 Hint: Check the spelling of the app name or try a more specific query")]
    NoReviewsFound { message: String },

    #[error("{service} is unavailable\nDetails: {details}\n\n💡 Hint: Verify the service endpoint in your configuration and your network connection")]
    UpstreamUnavailable { service: String, details: String },

    /// Validation error for configuration values and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}")]
    ConfigError { path: PathBuf, details: String },
}

impl SentimentError {
    pub fn missing_input(message: impl Into<String>) -> Self {
        SentimentError::MissingInput {
            message: message.into(),
        }
    }

    pub fn no_reviews(message: impl Into<String>) -> Self {
        SentimentError::NoReviewsFound {
            message: message.into(),
        }
    }

    pub fn upstream(service: impl Into<String>, details: impl fmt::Display) -> Self {
        SentimentError::UpstreamUnavailable {
            service: service.into(),
            details: details.to_string(),
        }
    }

    /// HTTP-equivalent status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SentimentError::MissingInput { .. } | SentimentError::Validation { .. } => 400,
            SentimentError::NoReviewsFound { .. } => 404,
            SentimentError::UpstreamUnavailable { .. } => 502,
            SentimentError::FileWriteError { .. } | SentimentError::ConfigError { .. } => 500,
        }
    }

    /// Short message without hints, suitable for a response body
    pub fn public_message(&self) -> String {
        match self {
            SentimentError::MissingInput { message } => message.clone(),
            SentimentError::NoReviewsFound { message } => message.clone(),
            SentimentError::UpstreamUnavailable { service, .. } => {
                format!("{} is unavailable", service)
            }
            SentimentError::Validation { message } => message.clone(),
            SentimentError::FileWriteError { path, .. } => {
                format!("Failed to write to file: {}", path.display())
            }
            SentimentError::ConfigError { path, .. } => {
                format!("Invalid configuration: {}", path.display())
            }
        }
    }
}
