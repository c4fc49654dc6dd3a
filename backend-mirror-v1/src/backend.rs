use async_trait::async_trait;
use tmdk_core::{AccountId, AccountLookup, Error, Network, PublicKey};

use super::client::MirrorClient;
use super::http_trait::HttpClient;
use super::reqwest_impl::ReqwestClient;

/// [`AccountLookup`] backed by a mirror-node REST endpoint.
#[derive(Clone, Debug)]
pub struct MirrorBackend<C: HttpClient> {
    client: MirrorClient<C>,
}

impl MirrorBackend<ReqwestClient> {
    pub fn new(network: Network) -> Self {
        Self::with_client(MirrorClient::new(network, ReqwestClient::new()))
    }
}

impl<C: HttpClient> MirrorBackend<C> {
    pub fn with_client(client: MirrorClient<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: HttpClient> AccountLookup for MirrorBackend<C> {
    async fn account_public_key(&self, account_id: &AccountId) -> tmdk_core::Result<PublicKey> {
        let info = self
            .client
            .account_info(account_id)
            .await
            .map_err(|e| Error::Backend(e.into()))?;

        let key_hex = info
            .key
            .and_then(|k| k.key)
            .ok_or(Error::MissingPublicKey(*account_id))?;

        PublicKey::from_hex(&key_hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[derive(Clone)]
    struct StaticHttp {
        body: String,
    }

    #[async_trait]
    impl HttpClient for StaticHttp {
        async fn get(&self, _url: &str, _query_params: &[(&str, String)]) -> Result<String> {
            Ok(self.body.clone())
        }
    }

    fn backend(body: &str) -> MirrorBackend<StaticHttp> {
        MirrorBackend::with_client(MirrorClient::with_host_url(
            "http://localhost:5551".to_string(),
            StaticHttp {
                body: body.to_string(),
            },
        ))
    }

    #[tokio::test]
    async fn resolves_public_key() {
        let backend = backend(
            r#"{ "account": "0.0.1234", "key": { "_type": "ED25519", "key": "aabbcc" }, "balance": null }"#,
        );
        let key = backend
            .account_public_key(&AccountId::from_num(1234))
            .await
            .unwrap();
        assert_eq!(key.to_hex(), "aabbcc");
    }

    #[tokio::test]
    async fn keyless_account_is_the_designated_error() {
        let backend = backend(r#"{ "account": "0.0.98", "key": null, "balance": null }"#);
        let err = backend
            .account_public_key(&AccountId::from_num(98))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingPublicKey(id) if id == AccountId::from_num(98)));
    }
}
