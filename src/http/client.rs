//! JSON transport — the networker capability every feed refresh goes
//! through.
//!
//! The engine only ever sees the [`JsonFetcher`] trait, so tests swap in
//! a canned fetcher. Retry/backoff and authentication are out of scope at
//! this layer; a transport timeout surfaces as a fetch failure.

use crate::error::HttpError;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetch a URL and return its body as parsed JSON.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, HttpError>;
}

/// Production fetcher backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct HttpJson {
    client: Client,
}

impl HttpJson {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpJson {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetcher for HttpJson {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(%url, "fetching json");

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::from(e)
            }
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<serde_json::Value>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
