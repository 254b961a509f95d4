use crate::shared::error::SentimentError;
use serde::Serialize;

/// ErrorResponse - structured error object returned instead of a result
///
/// Mirrors the error body of the HTTP surface: a message plus the
/// status-code equivalent of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl ErrorResponse {
    pub const INTERNAL_ERROR_STATUS: u16 = 500;

    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SentimentError>() {
            Some(sentiment_error) => Self {
                error: sentiment_error.public_message(),
                status: sentiment_error.status_code(),
            },
            None => Self {
                error: error.to_string(),
                status: Self::INTERNAL_ERROR_STATUS,
            },
        }
    }
}
