use super::http::{self, DEFAULT_TIMEOUT, MAX_ATTEMPTS};
use crate::ports::outbound::ReviewSource;
use crate::sentiment_analysis::domain::{AppQuery, Review};
use crate::shared::error::SentimentError;
use crate::shared::security::validate_url_component;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const SERVICE_NAME: &str = "Review service";

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "appId")]
    app_id: String,
}

#[derive(Debug, Deserialize)]
struct ReviewEntry {
    #[serde(default)]
    content: Option<String>,
}

/// ReviewServiceClient adapter for an HTTP JSON app-store review service
///
/// Resolves a free-text app name through `GET {base}/search` (first hit
/// wins) and then fetches review texts through `GET {base}/reviews`.
pub struct ReviewServiceClient {
    client: reqwest::Client,
    base_url: String,
    lang: String,
    country: String,
    max_attempts: u32,
}

impl ReviewServiceClient {
    /// Creates a client for the service at `base_url`
    pub fn new(base_url: &str, lang: &str, country: &str) -> Result<Self> {
        Self::with_timeout(base_url, lang, country, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, lang: &str, country: &str, timeout: Duration) -> Result<Self> {
        validate_url_component(lang, "Language")?;
        validate_url_component(country, "Country")?;

        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: http::trim_base_url(base_url),
            lang: lang.to_string(),
            country: country.to_string(),
            max_attempts: MAX_ATTEMPTS,
        })
    }

    fn search_url(&self, term: &str) -> String {
        format!(
            "{}/search?term={}&lang={}&country={}",
            self.base_url,
            urlencoding::encode(term),
            urlencoding::encode(&self.lang),
            urlencoding::encode(&self.country)
        )
    }

    fn reviews_url(&self, app_id: &str, count: usize) -> String {
        format!(
            "{}/reviews?appId={}&lang={}&country={}&count={}",
            self.base_url,
            urlencoding::encode(app_id),
            urlencoding::encode(&self.lang),
            urlencoding::encode(&self.country),
            count
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        http::with_retry(SERVICE_NAME, self.max_attempts, || async {
            tracing::debug!(url, "GET");
            let response = self.client.get(url).send().await?;
            let response = http::ensure_success(response).await?;
            Ok::<T, anyhow::Error>(response.json::<T>().await?)
        })
        .await
    }

    /// Canonical app id for the best search hit, if any
    async fn resolve_app_id(&self, query: &AppQuery) -> Result<Option<String>> {
        let hits: Vec<SearchHit> = self.get_json(&self.search_url(query.as_str())).await?;
        Ok(hits.into_iter().next().map(|hit| hit.app_id))
    }
}

/// Keeps entries with non-blank content, in service order
fn into_reviews(entries: Vec<ReviewEntry>) -> Vec<Review> {
    entries
        .into_iter()
        .filter_map(|entry| entry.content)
        .filter(|content| !content.trim().is_empty())
        .map(Review::new)
        .collect()
}

#[async_trait]
impl ReviewSource for ReviewServiceClient {
    async fn fetch_reviews(&self, query: &AppQuery, count: usize) -> Result<Vec<Review>> {
        let Some(app_id) = self.resolve_app_id(query).await? else {
            tracing::info!(app = %query, "no search result");
            return Ok(Vec::new());
        };

        validate_url_component(&app_id, "App id")
            .map_err(|e| SentimentError::upstream(SERVICE_NAME, e))?;
        tracing::debug!(app = %query, app_id = %app_id, "resolved app");

        let entries: Vec<ReviewEntry> = self.get_json(&self.reviews_url(&app_id, count)).await?;
        let mut reviews = into_reviews(entries);
        reviews.truncate(count);
        Ok(reviews)
    }
}
