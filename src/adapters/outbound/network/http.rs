//! HTTP plumbing shared by the network adapters.

use crate::shared::error::SentimentError;
use crate::shared::Result;
use std::future::Future;
use std::time::Duration;

pub(super) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(super) const MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Builds a client with the crate user agent and a request timeout
pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let user_agent = format!("review-sentiment/{}", env!("CARGO_PKG_VERSION"));
    let builder = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent);
    // Local canned servers must not be routed through a system proxy
    #[cfg(test)]
    let builder = builder.no_proxy();
    Ok(builder.build()?)
}

/// Runs `request` up to `max_attempts` times with linear back-off
///
/// The last failure is reported as `SentimentError::UpstreamUnavailable`
/// for `service`.
pub(super) async fn with_retry<T, F, Fut>(service: &str, max_attempts: u32, mut request: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 1;
    loop {
        match request().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < max_attempts => {
                let details = format!("{:#}", e);
                tracing::warn!(service, attempt, error = %details, "request failed, retrying");
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(SentimentError::upstream(service, format!("{:#}", e)).into()),
        }
    }
}

/// Fails on any non-success status, keeping a short excerpt of the body
pub(super) async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(200).collect();
    anyhow::bail!("HTTP {}: {}", status, excerpt.trim())
}

/// Removes trailing slashes so paths can be appended with `/`
pub(super) fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_build_client() {
        assert!(build_client(DEFAULT_TIMEOUT).is_ok());
    }

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url(" http://host/api/ "), "http://host/api");
        assert_eq!(trim_base_url("http://host"), "http://host");
    }

    #[tokio::test]
    async fn test_with_retry_succeeds_after_failures() {
        let calls = AtomicU32::new(0);
        let value = with_retry("Test service", 3, || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                anyhow::bail!("transient")
            }
            Ok(42)
        })
        .await
        .unwrap();

        assert_eq!(value, 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_with_retry_gives_up_as_upstream_error() {
        let calls = AtomicU32::new(0);
        let err = with_retry("Test service", 2, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(anyhow::anyhow!("connection refused"))
        })
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let sentiment_err = err.downcast_ref::<SentimentError>().unwrap();
        assert_eq!(sentiment_err.status_code(), 502);
        assert!(err.to_string().contains("Test service is unavailable"));
        assert!(err.to_string().contains("connection refused"));
    }
}
