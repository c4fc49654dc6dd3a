use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::http_trait::HttpClient;

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String> {
        let mut request = self.client.get(url);

        for (key, value) in query_params {
            request = request.query(&[(key, value)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("HTTP GET request failed: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow!("HTTP GET request returned error status: {}", e))?
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        Ok(response)
    }
}
