use anyhow::Result;
use async_trait::async_trait;

/// Minimal async HTTP client trait so consumers can bring their own HTTP
/// library (hyper, isahc, platform APIs, ...). [`crate::ReqwestClient`] is
/// the batteries-included implementation.
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a GET request and return the response body.
    ///
    /// # Arguments
    /// * `url` - The full URL to request
    /// * `query_params` - Optional query parameters as key-value pairs
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String>;
}
