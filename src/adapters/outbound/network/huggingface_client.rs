use super::http::{self, DEFAULT_TIMEOUT, MAX_ATTEMPTS};
use crate::ports::outbound::TransformerScorer;
use crate::sentiment_analysis::domain::RawClassification;
use crate::shared::error::SentimentError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE_NAME: &str = "Transformer model";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Text-classification output; the hosted API nests one list per input
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    /// Highest-scoring label; the first one wins ties
    fn top(self) -> Option<LabelScore> {
        let candidates = match self {
            InferenceResponse::Nested(lists) => lists.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(list) => list,
        };
        candidates.into_iter().fold(None, |best, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        })
    }
}

/// HuggingFaceClient adapter for a hosted text-classification model
///
/// Talks to the Hugging Face inference API (or any server speaking the same
/// protocol). The bearer token is optional so self-hosted endpoints work
/// without one.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
    max_attempts: u32,
}

impl HuggingFaceClient {
    pub fn new(endpoint: &str, api_token: Option<String>) -> Result<Self> {
        Self::with_timeout(endpoint, api_token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
            endpoint: http::trim_base_url(endpoint),
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            max_attempts: MAX_ATTEMPTS,
        })
    }

    async fn infer(&self, text: &str) -> Result<InferenceResponse> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        let response = http::ensure_success(request.send().await?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TransformerScorer for HuggingFaceClient {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        let response =
            http::with_retry(SERVICE_NAME, self.max_attempts, || self.infer(text)).await?;

        let top = response
            .top()
            .ok_or_else(|| SentimentError::upstream(SERVICE_NAME, "empty classification output"))?;
        RawClassification::new(top.label, top.score)
            .map_err(|e| SentimentError::upstream(SERVICE_NAME, e).into())
    }
}
