//! `PageClient` - HTTP client for the schedule page.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalScheduleSource;

/// Default schedule page.
pub const DEFAULT_SOURCE_URL: &str = "https://www.multimediostv.com/programacion";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries after the first attempt.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay between retries.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Schedule page HTTP client.
#[derive(Debug)]
pub struct PageClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Page URL.
    url: Url,
    /// Retries after the first attempt.
    max_retries: u32,
    /// Delay between retries.
    retry_delay: Duration,
}

/// Builder for `PageClient`.
#[derive(Debug)]
pub struct PageClientBuilder {
    url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
}

impl PageClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            url: None,
            user_agent: None,
            timeout: None,
            max_retries: None,
            retry_delay: None,
        }
    }

    /// Sets the page URL (required).
    #[must_use]
    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the per-request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the number of retries after the first attempt (default: 3).
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the delay between retries (default: 2s).
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `url` or `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<PageClient> {
        let url = self.url.context("url is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(PageClient {
            http_client,
            url,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
        })
    }
}

impl PageClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> PageClientBuilder {
        PageClientBuilder::new()
    }

    /// Returns the page URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Sends a GET request with retry logic.
    ///
    /// Retries up to `max_retries` times on transport errors, non-success
    /// statuses and unreadable bodies. HTTP 429 waits for `Retry-After`
    /// when present.
    async fn get_with_retry(&self) -> Result<String> {
        let mut last_err = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = match self.http_client.get(self.url.clone()).send().await {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Request failed, will retry");
                    last_err = Some(anyhow::Error::new(e).context("schedule page request failed"));
                    continue;
                }
            };

            let status = response.status();
            tracing::trace!(%status, headers = ?response.headers(), "Response headers");

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);

                tracing::warn!(
                    attempt,
                    code = status.as_u16(),
                    retry_after_secs = retry_after.map(|d| d.as_secs()),
                    "Rate limited, waiting before retry"
                );
                last_err = Some(anyhow::anyhow!("schedule page rate limited (HTTP {status})"));
                if let Some(wait) = retry_after {
                    tokio::time::sleep(wait).await;
                }
                continue;
            }

            if !status.is_success() {
                tracing::warn!(attempt, code = status.as_u16(), "Unexpected status, will retry");
                last_err = Some(anyhow::anyhow!("schedule page returned HTTP {status}"));
                continue;
            }

            match response.text().await {
                Ok(body) => {
                    tracing::debug!(body_len = body.len(), "Response body received");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Failed to read response body, will retry");
                    last_err =
                        Some(anyhow::Error::new(e).context("failed to read schedule page body"));
                }
            }
        }

        Err(last_err
            .unwrap_or_else(|| anyhow::anyhow!("schedule page request failed after retries"))
            .context(format!("failed to fetch {}", self.url)))
    }
}

impl LocalScheduleSource for PageClient {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn fetch_page(&self) -> Result<String> {
        self.get_with_retry().await
    }
}
