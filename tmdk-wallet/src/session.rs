use serde::{Deserialize, Serialize};
use tmdk_core::{
    AccountId, AnyTransaction, FrozenTransaction, Result, TokenCreateTransaction,
    TokenMintTransaction, TokenUpdateTransaction, TransferTransaction,
};

/// A prepared transaction on its way to the signing layer.
///
/// Frozen requests carry their identity and routing already; loose bodies
/// let the session attach its own routing before signing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionRequest {
    Frozen(FrozenTransaction),
    Loose(AnyTransaction),
}

impl From<FrozenTransaction> for TransactionRequest {
    fn from(tx: FrozenTransaction) -> Self {
        TransactionRequest::Frozen(tx)
    }
}

impl From<AnyTransaction> for TransactionRequest {
    fn from(tx: AnyTransaction) -> Self {
        TransactionRequest::Loose(tx)
    }
}

impl From<TokenCreateTransaction> for TransactionRequest {
    fn from(tx: TokenCreateTransaction) -> Self {
        TransactionRequest::Loose(tx.into())
    }
}

impl From<TokenMintTransaction> for TransactionRequest {
    fn from(tx: TokenMintTransaction) -> Self {
        TransactionRequest::Loose(tx.into())
    }
}

impl From<TokenUpdateTransaction> for TransactionRequest {
    fn from(tx: TokenUpdateTransaction) -> Self {
        TransactionRequest::Loose(tx.into())
    }
}

impl From<TransferTransaction> for TransactionRequest {
    fn from(tx: TransferTransaction) -> Self {
        TransactionRequest::Loose(tx.into())
    }
}

/// Outcome of a signed and broadcast transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub transaction_id: String,
    pub status: String,
}

/// The external wallet connector seam.
///
/// A session owns the connected account and the keys; this kit only reads
/// the account id and hands over fully built requests. Signing, fee
/// payment and broadcast happen on the other side of this trait.
#[async_trait::async_trait]
pub trait WalletSession: Send + Sync {
    /// The connected account, or `None` when no wallet is paired.
    fn account_id(&self) -> Option<AccountId>;

    /// Sign the request with the wallet's key and broadcast it.
    async fn sign_and_submit(&self, request: TransactionRequest) -> Result<SubmitResult>;
}
