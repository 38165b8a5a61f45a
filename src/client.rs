//! Shared HTTP client for Wikipedia and static-map requests.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{GeospotError, Result};

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("geospot/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
        }
    }
}

/// One configured `reqwest::Client`, constructed at process start and shared
/// by every network operation of a run.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
}

impl WikiClient {
    /// Create a new client from the given settings
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeospotError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET a URL and return the response body as text
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeospotError::network(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GeospotError::network(format!(
                "Request to {url} failed with status {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| GeospotError::network(format!("Failed to read response from {url}: {e}")))
    }

    /// GET a URL and return the raw response bytes
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeospotError::network(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GeospotError::network(format!(
                "Request to {url} failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeospotError::network(format!("Failed to read response from {url}: {e}")))?;

        Ok(bytes.to_vec())
    }
}
