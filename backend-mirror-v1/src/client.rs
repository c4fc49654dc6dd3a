use anyhow::Result;
use tmdk_core::{AccountId, Network};

use super::api_structs::AccountInfoResponse;
use super::http_trait::HttpClient;

/// Thin client for the mirror-node REST API.
///
/// URL assembly and JSON decoding only; error classification happens in
/// [`crate::MirrorBackend`].
#[derive(Clone, Debug)]
pub struct MirrorClient<C: HttpClient> {
    http: C,
    host_url: String,
}

impl<C: HttpClient> MirrorClient<C> {
    pub fn new(network: Network, http: C) -> Self {
        Self::with_host_url(network.mirror_base_url(), http)
    }

    pub fn with_host_url(host_url: String, http: C) -> Self {
        // we build paths with a leading slash, so strip any trailing one
        let host_url = host_url.trim_end_matches('/').to_string();
        Self { http, host_url }
    }

    pub async fn account_info(&self, account_id: &AccountId) -> Result<AccountInfoResponse> {
        let url = format!("{}/api/v1/accounts/{}", self.host_url, account_id);
        let body = self.http.get(&url, &[]).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct RecordingHttp {
        urls: Arc<Mutex<Vec<String>>>,
        body: String,
    }

    #[async_trait]
    impl HttpClient for RecordingHttp {
        async fn get(&self, url: &str, _query_params: &[(&str, String)]) -> Result<String> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn builds_account_url_from_network() {
        let urls = Arc::new(Mutex::new(Vec::new()));
        let http = RecordingHttp {
            urls: urls.clone(),
            body: r#"{ "account": "0.0.1234", "key": null, "balance": null }"#.to_string(),
        };
        let client = MirrorClient::new(Network::Mainnet, http);

        let info = client
            .account_info(&AccountId::from_num(1234))
            .await
            .unwrap();
        assert_eq!(info.account.as_deref(), Some("0.0.1234"));
        assert_eq!(
            urls.lock().unwrap().as_slice(),
            ["https://mainnet-public.mirrornode.hedera.com/api/v1/accounts/0.0.1234"]
        );
    }

    #[tokio::test]
    async fn trailing_slash_is_normalized() {
        let http = RecordingHttp {
            urls: Arc::new(Mutex::new(Vec::new())),
            body: r#"{ "account": null, "key": null, "balance": null }"#.to_string(),
        };
        let urls = http.urls.clone();
        let client = MirrorClient::with_host_url("http://localhost:5551/".to_string(), http);

        client.account_info(&AccountId::from_num(3)).await.unwrap();
        assert_eq!(
            urls.lock().unwrap().as_slice(),
            ["http://localhost:5551/api/v1/accounts/0.0.3"]
        );
    }
}
