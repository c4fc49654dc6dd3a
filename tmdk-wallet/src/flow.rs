use tmdk_core::{
    AccountId, AccountLookup, Hbar, Result, TokenId, TokenUpdateFields,
};

use crate::service::{CreateTokenParams, TokenService};
use crate::session::{SubmitResult, TransactionRequest, WalletSession};

/// Page-level glue: gate every action on wallet connection, build the
/// request, forward it for signing, and log-and-swallow failures.
///
/// Submission failures return `None` after an error log; there is no
/// retry and no classification of the session's errors.
pub struct MintFlow<L: AccountLookup, S: WalletSession> {
    service: TokenService<L>,
    session: S,
}

impl<L: AccountLookup, S: WalletSession> MintFlow<L, S> {
    pub fn new(lookup: L, session: S) -> Self {
        Self {
            service: TokenService::new(lookup),
            session,
        }
    }

    pub fn service(&self) -> &TokenService<L> {
        &self.service
    }

    pub async fn create_token(&self, params: CreateTokenParams) -> Option<SubmitResult> {
        self.connected_account()?;
        self.build_and_submit(self.service.create_token(params).await.map(Into::into))
            .await
    }

    pub async fn mint_token(&self, token_id: TokenId, cids: &[String]) -> Option<SubmitResult> {
        self.connected_account()?;
        let tx = self.service.mint_token(token_id, cids);
        self.build_and_submit(Ok(tx.into())).await
    }

    /// Partial token update paid by the connected account.
    pub async fn update_token(
        &self,
        token_id: TokenId,
        changes: TokenUpdateFields,
    ) -> Option<SubmitResult> {
        let payer = self.connected_account()?;
        self.build_and_submit(
            self.service
                .update_token(token_id, payer, changes)
                .map(Into::into),
        )
        .await
    }

    pub async fn send_nft(
        &self,
        token_id: TokenId,
        serial: u64,
        receiver: AccountId,
    ) -> Option<SubmitResult> {
        let sender = self.connected_account()?;
        let tx = self.service.send_nft(token_id, serial, sender, receiver);
        self.build_and_submit(Ok(tx.into())).await
    }

    /// Sell one serial: ownership moves to `receiver`, value moves with it.
    pub async fn send_nft_with_value(
        &self,
        token_id: TokenId,
        serial: u64,
        receiver: AccountId,
        price: Hbar,
    ) -> Option<SubmitResult> {
        let sender = self.connected_account()?;
        let tx = self
            .service
            .send_nft_with_value(token_id, serial, sender, receiver, price);
        self.build_and_submit(Ok(tx.into())).await
    }

    pub async fn transfer(&self, to: AccountId, amount: Hbar) -> Option<SubmitResult> {
        let from = self.connected_account()?;
        self.build_and_submit(self.service.transfer(from, to, amount).map(Into::into))
            .await
    }

    fn connected_account(&self) -> Option<AccountId> {
        let account = self.session.account_id();
        if account.is_none() {
            log::warn!("no wallet connected, ignoring action");
        }
        account
    }

    async fn build_and_submit(
        &self,
        request: Result<TransactionRequest>,
    ) -> Option<SubmitResult> {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                log::error!("failed to build transaction: {}", e);
                return None;
            }
        };

        match self.session.sign_and_submit(request).await {
            Ok(result) => Some(result),
            Err(e) => {
                log::error!("transaction submission failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };
    use tmdk_core::{AccountLookup, Error, PublicKey};

    struct NoopLookup;

    #[async_trait::async_trait]
    impl AccountLookup for NoopLookup {
        async fn account_public_key(&self, account_id: &AccountId) -> Result<PublicKey> {
            Err(Error::MissingPublicKey(*account_id))
        }
    }

    #[derive(Clone)]
    struct FakeSession {
        account: Option<AccountId>,
        fail: bool,
        submitted: Arc<Mutex<Vec<TransactionRequest>>>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeSession {
        fn connected() -> Self {
            Self {
                account: Some(AccountId::from_num(5830192)),
                fail: false,
                submitted: Arc::new(Mutex::new(Vec::new())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn disconnected() -> Self {
            Self {
                account: None,
                ..Self::connected()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::connected()
            }
        }
    }

    #[async_trait::async_trait]
    impl WalletSession for FakeSession {
        fn account_id(&self) -> Option<AccountId> {
            self.account
        }

        async fn sign_and_submit(&self, request: TransactionRequest) -> Result<SubmitResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Backend("user rejected signing".into()));
            }
            self.submitted.lock().unwrap().push(request);
            Ok(SubmitResult {
                transaction_id: "0.0.5830192@1700000000.000000000".to_string(),
                status: "SUCCESS".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn disconnected_wallet_blocks_every_action() {
        let session = FakeSession::disconnected();
        let calls = session.calls.clone();
        let flow = MintFlow::new(NoopLookup, session);

        let res = flow
            .mint_token(TokenId::from_num(1), &["Qm123".to_string()])
            .await;
        assert!(res.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mint_submits_loose_request() {
        let session = FakeSession::connected();
        let submitted = session.submitted.clone();
        let flow = MintFlow::new(NoopLookup, session);

        let res = flow
            .mint_token(TokenId::from_num(1), &["Qm123".to_string()])
            .await;
        assert_eq!(res.unwrap().status, "SUCCESS");

        let submitted = submitted.lock().unwrap();
        assert!(matches!(submitted[0], TransactionRequest::Loose(_)));
    }

    #[tokio::test]
    async fn update_submits_frozen_request_paid_by_session_account() {
        let session = FakeSession::connected();
        let submitted = session.submitted.clone();
        let flow = MintFlow::new(NoopLookup, session);

        let changes = TokenUpdateFields {
            symbol: Some("NEW".to_string()),
            ..Default::default()
        };
        flow.update_token(TokenId::from_num(7), changes)
            .await
            .unwrap();

        match &submitted.lock().unwrap()[0] {
            TransactionRequest::Frozen(frozen) => {
                assert_eq!(frozen.transaction_id().payer, AccountId::from_num(5830192));
            }
            other => panic!("expected frozen request, got {:?}", other),
        };
    }

    #[tokio::test]
    async fn submission_errors_are_swallowed() {
        let session = FakeSession::failing();
        let calls = session.calls.clone();
        let flow = MintFlow::new(NoopLookup, session);

        let res = flow
            .send_nft_with_value(
                TokenId::from_num(7125092),
                5,
                AccountId::from_num(5843252),
                Hbar::from_tinybars(1000),
            )
            .await;
        assert!(res.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_token_build_failure_never_reaches_session() {
        let session = FakeSession::connected();
        let calls = session.calls.clone();
        let flow = MintFlow::new(NoopLookup, session);

        let res = flow
            .create_token(crate::service::CreateTokenParams {
                account_id: AccountId::from_num(5830192),
                token_name: "n".to_string(),
                token_symbol: "s".to_string(),
                supply: 10,
                pause_key: None,
                custom_fees: Vec::new(),
                key_roles: Vec::new(),
            })
            .await;
        assert!(res.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn requests_serialize_for_the_wire() {
        let tx = tmdk_core::TransferTransaction::new().hbar_transfer(
            AccountId::from_num(1),
            Hbar::from_tinybars(0),
        );
        let request: TransactionRequest = tx.into();
        let json = serde_json::to_string(&request).unwrap();
        let back: TransactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }
}
