//! Plain HTTP GET transport for the yugiohprices.com API.
//!
//! Returns response bodies as text (for JSON envelopes) or raw bytes (for
//! card images). No retries and no status interpretation for text bodies:
//! the envelope carries the outcome.

use std::time::Duration;

use reqwest::Client;

use crate::error::{Result, YugiohPricesError};

/// Owns the pooled HTTP client used for every request of one API client.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    timeout: Duration,
}

impl Transport {
    /// Create a transport with the given request timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                YugiohPricesError::InvalidArgument(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client, timeout })
    }

    /// The per-request timeout this transport was built with.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body decoded as text, whatever the HTTP status.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        Ok(resp.text().await?)
    }

    /// GET `url` and return the raw body bytes.
    ///
    /// Non-success statuses are errors here since there is no envelope to inspect.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("GET {} (binary)", url);
        let resp = self.client.get(url).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}
