use crate::shared::error::SentimentError;
use crate::shared::Result;

/// Maximum length for an app name query
const MAX_QUERY_LENGTH: usize = 200;

/// NewType wrapper for a free-text app name, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppQuery(String);

impl AppQuery {
    /// # Errors
    /// `SentimentError::MissingInput` with `missing_message` when the trimmed
    /// name is empty; `SentimentError::Validation` when it is too long.
    pub fn new(raw: &str, missing_message: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SentimentError::missing_input(missing_message).into());
        }

        if trimmed.chars().count() > MAX_QUERY_LENGTH {
            return Err(SentimentError::Validation {
                message: format!(
                    "App name is too long ({} characters). Maximum allowed: {} characters",
                    trimmed.chars().count(),
                    MAX_QUERY_LENGTH
                ),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
