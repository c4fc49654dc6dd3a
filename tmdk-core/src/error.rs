use entity_id::AccountId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Account lookup
    #[error("no public key on record for account {0}")]
    MissingPublicKey(AccountId),

    // Validation
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("unknown key role: {0}")]
    UnknownKeyRole(String),
    #[error("hbar transfers must net to zero, got {0} tinybars")]
    UnbalancedTransfer(i64),
    #[error("metadata entry {index} is {len} bytes, max is {max}")]
    MetadataTooLarge {
        index: usize,
        len: usize,
        max: usize,
    },
    #[error("mint requires at least one metadata entry")]
    EmptyMint,
    #[error("royalty fee denominator must be non-zero")]
    ZeroFeeDenominator,

    // Wrapped external errors
    #[error(transparent)]
    EntityId(#[from] entity_id::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("key hex: {0}")]
    KeyHex(#[from] hex::FromHexError),

    // Backend pass-through for downstream crates
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
