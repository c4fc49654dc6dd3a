use crate::error::Result;
use crate::keys::PublicKey;
use entity_id::AccountId;

/// Read-only source of ledger account state.
///
/// Implemented by the mirror-node backend crate; token creation needs it to
/// resolve the key that will control the new token's authority roles. Tests
/// provide in-memory implementations.
#[async_trait::async_trait]
pub trait AccountLookup: Send + Sync {
    /// Resolve the public key on record for `account_id`.
    ///
    /// Fails with [`crate::Error::MissingPublicKey`] when the account exists
    /// but exposes no key.
    async fn account_public_key(&self, account_id: &AccountId) -> Result<PublicKey>;
}
