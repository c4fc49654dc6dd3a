mod token_create;
mod token_mint;
mod token_update;
mod transfer;

pub use token_create::{TokenCreateTransaction, TokenSupplyType, TokenType};
pub use token_mint::{TokenMintTransaction, MAX_METADATA_BYTES};
pub use token_update::{TokenUpdateFields, TokenUpdateTransaction};
pub use transfer::{NftTransfer, TransferTransaction};

use crate::error::Result;
use crate::timestamp::Timestamp;
use entity_id::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The node transactions are submitted to when the caller does not pick one.
pub const DEFAULT_NODE_ACCOUNT: AccountId = AccountId::from_num(3);

/// A transaction identifier: the paying account plus the instant the
/// transaction becomes valid. Unique per payer as long as the clock moves.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionId {
    pub payer: AccountId,
    pub valid_start: Timestamp,
}

impl TransactionId {
    pub fn generate(payer: AccountId) -> Self {
        Self {
            payer,
            valid_start: Timestamp::now(),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.payer, self.valid_start)
    }
}

/// Any of the transaction bodies this kit can build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyTransaction {
    TokenCreate(TokenCreateTransaction),
    TokenMint(TokenMintTransaction),
    TokenUpdate(TokenUpdateTransaction),
    Transfer(TransferTransaction),
}

impl AnyTransaction {
    fn validate(&self) -> Result<()> {
        match self {
            AnyTransaction::TokenMint(tx) => tx.check_metadata(),
            AnyTransaction::Transfer(tx) => tx.check_balanced(),
            AnyTransaction::TokenCreate(_) | AnyTransaction::TokenUpdate(_) => Ok(()),
        }
    }

    /// Finalize identity and routing in one pass.
    ///
    /// Validation runs first, so a body that breaks a ledger invariant
    /// never becomes a frozen transaction.
    pub fn freeze_with(self, payer: AccountId, node_account_id: AccountId) -> Result<FrozenTransaction> {
        self.validate()?;
        Ok(FrozenTransaction {
            transaction_id: TransactionId::generate(payer),
            node_account_id,
            transaction: self,
        })
    }
}

impl From<TokenCreateTransaction> for AnyTransaction {
    fn from(tx: TokenCreateTransaction) -> Self {
        AnyTransaction::TokenCreate(tx)
    }
}

impl From<TokenMintTransaction> for AnyTransaction {
    fn from(tx: TokenMintTransaction) -> Self {
        AnyTransaction::TokenMint(tx)
    }
}

impl From<TokenUpdateTransaction> for AnyTransaction {
    fn from(tx: TokenUpdateTransaction) -> Self {
        AnyTransaction::TokenUpdate(tx)
    }
}

impl From<TransferTransaction> for AnyTransaction {
    fn from(tx: TransferTransaction) -> Self {
        AnyTransaction::Transfer(tx)
    }
}

/// A finalized transaction: identity and routing fixed, body read-only.
///
/// There is deliberately no mutable access; once frozen, a transaction can
/// only be inspected or handed to the signing layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrozenTransaction {
    transaction_id: TransactionId,
    node_account_id: AccountId,
    transaction: AnyTransaction,
}

impl FrozenTransaction {
    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn node_account_id(&self) -> &AccountId {
        &self.node_account_id
    }

    pub fn transaction(&self) -> &AnyTransaction {
        &self.transaction
    }
}
