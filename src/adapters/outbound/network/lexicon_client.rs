use super::http::{self, DEFAULT_TIMEOUT, MAX_ATTEMPTS};
use crate::ports::outbound::LexiconScorer;
use crate::sentiment_analysis::domain::LexiconScore;
use crate::shared::error::SentimentError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SERVICE_NAME: &str = "Lexicon scorer";

#[derive(Debug, Serialize)]
struct LexiconRequest<'a> {
    text: &'a str,
}

/// Polarity scores as returned by a VADER-style scoring service
#[derive(Debug, Deserialize)]
struct PolarityScores {
    #[serde(default)]
    neg: f64,
    #[serde(default)]
    neu: f64,
    #[serde(default)]
    pos: f64,
    compound: f64,
}

impl PolarityScores {
    fn into_score(self) -> Result<LexiconScore> {
        LexiconScore::with_polarities(self.compound, self.pos, self.neu, self.neg)
    }
}

/// LexiconServiceClient adapter for an HTTP lexicon scoring service
///
/// `POST {endpoint}` with `{"text": ...}`, answered by
/// `{"neg", "neu", "pos", "compound"}`.
pub struct LexiconServiceClient {
    client: reqwest::Client,
    endpoint: String,
    max_attempts: u32,
}

impl LexiconServiceClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
            endpoint: http::trim_base_url(endpoint),
            max_attempts: MAX_ATTEMPTS,
        })
    }
}

#[async_trait]
impl LexiconScorer for LexiconServiceClient {
    async fn score(&self, text: &str) -> Result<LexiconScore> {
        let scores = http::with_retry(SERVICE_NAME, self.max_attempts, || async {
            let response = self
                .client
                .post(&self.endpoint)
                .json(&LexiconRequest { text })
                .send()
                .await?;
            let response = http::ensure_success(response).await?;
            Ok::<_, anyhow::Error>(response.json::<PolarityScores>().await?)
        })
        .await?;

        // An out-of-range compound means the service is misbehaving
        scores
            .into_score()
            .map_err(|e| SentimentError::upstream(SERVICE_NAME, e).into())
    }
}
