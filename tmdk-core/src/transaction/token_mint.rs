use crate::error::{Error, Result};
use entity_id::TokenId;
use serde::{Deserialize, Serialize};

/// The ledger caps per-unit metadata at 100 bytes.
pub const MAX_METADATA_BYTES: usize = 100;

/// Mints new units of an existing token class.
///
/// One metadata payload per minted unit; the serials the ledger assigns
/// come back in the submission receipt, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMintTransaction {
    token_id: Option<TokenId>,
    metadata: Vec<Vec<u8>>,
}

impl TokenMintTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_id(mut self, token_id: TokenId) -> Self {
        self.token_id = Some(token_id);
        self
    }

    pub fn metadata(mut self, metadata: Vec<Vec<u8>>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn push_metadata(mut self, entry: Vec<u8>) -> Self {
        self.metadata.push(entry);
        self
    }

    pub fn get_token_id(&self) -> Option<&TokenId> {
        self.token_id.as_ref()
    }

    pub fn get_metadata(&self) -> &[Vec<u8>] {
        &self.metadata
    }

    pub(crate) fn check_metadata(&self) -> Result<()> {
        if self.metadata.is_empty() {
            return Err(Error::EmptyMint);
        }
        for (index, entry) in self.metadata.iter().enumerate() {
            if entry.len() > MAX_METADATA_BYTES {
                return Err(Error::MetadataTooLarge {
                    index,
                    len: entry.len(),
                    max: MAX_METADATA_BYTES,
                });
            }
        }
        Ok(())
    }
}
