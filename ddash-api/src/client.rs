use std::future::Future;
use std::time::Duration;

use log::warn;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{Result, TransportError};

/// Default API base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Maximum number of attempts for a fetch (first try + 3 retries).
pub const MAX_FETCH_ATTEMPTS: u32 = 4;

/// Fixed delay between attempts in milliseconds. No backoff growth: the
/// API is local and either comes back quickly or not at all.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Endpoint paths for the three dataset collections.
pub const WEATHER_ENDPOINT: &str = "/weather";
pub const HOUSEPRICE_ENDPOINT: &str = "/houseprice";
pub const FLIGHTS_ENDPOINT: &str = "/flights";

/// Retry behavior for a fetch. Every failure is retried uniformly,
/// network errors and 4xx alike.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Delay between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_FETCH_ATTEMPTS,
            delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Policy for tests: same attempt count, no sleeping.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }
}

/// Run `op` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between attempts and logging a warning per failure. Returns the first
/// success or the last error once attempts are exhausted.
pub async fn fetch_with_retry<T, F, Fut>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                warn!(
                    "Attempt {}/{}: fetching {} failed: {}",
                    attempt, max_attempts, what, err
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(err) => {
                warn!(
                    "Attempt {}/{}: fetching {} failed: {}",
                    attempt, max_attempts, what, err
                );
                return Err(err);
            }
        }
    }
}

/// HTTP client for the dashboard API.
///
/// Issues plain GETs against the three JSON list endpoints. Limiting to N
/// rows is a client-side concern (see [`crate::loader`]); the API has no
/// query parameters or pagination.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a full JSON list collection, retrying per the client's policy.
    pub async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, endpoint);
        fetch_with_retry(&self.retry, endpoint, |_| self.request(&url)).await
    }

    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }
        Ok(response.json::<Vec<T>>().await?)
    }
}

/// Build a `TransportError::Status` from a non-2xx response, reading the
/// body text on a best-effort basis.
async fn status_error(status: StatusCode, response: reqwest::Response) -> TransportError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    TransportError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        body,
    }
}
