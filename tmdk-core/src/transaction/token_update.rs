use crate::keys::PublicKey;
use crate::timestamp::Timestamp;
use entity_id::{AccountId, TokenId};
use serde::{Deserialize, Serialize};

/// Sparse set of mutable token fields.
///
/// `None` means "leave at prior value"; only `Some` fields are part of
/// the update. Explicit options instead of sentinel values keep partial
/// update semantics visible at the type level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUpdateFields {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub treasury_account_id: Option<AccountId>,
    pub admin_key: Option<PublicKey>,
    pub kyc_key: Option<PublicKey>,
    pub freeze_key: Option<PublicKey>,
    pub wipe_key: Option<PublicKey>,
    pub supply_key: Option<PublicKey>,
    pub fee_schedule_key: Option<PublicKey>,
    pub pause_key: Option<PublicKey>,
    pub auto_renew_account_id: Option<AccountId>,
    pub auto_renew_period: Option<u64>,
    pub expiration_time: Option<Timestamp>,
    pub memo: Option<String>,
}

impl TokenUpdateFields {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Updates mutable fields of an existing token class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenUpdateTransaction {
    token_id: TokenId,
    fields: TokenUpdateFields,
}

impl TokenUpdateTransaction {
    pub fn new(token_id: TokenId) -> Self {
        Self {
            token_id,
            fields: TokenUpdateFields::default(),
        }
    }

    pub fn fields(mut self, fields: TokenUpdateFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.fields.name = Some(name.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.fields.symbol = Some(symbol.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.fields.memo = Some(memo.into());
        self
    }

    pub fn get_token_id(&self) -> &TokenId {
        &self.token_id
    }

    pub fn get_fields(&self) -> &TokenUpdateFields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supplied_fields_are_set() {
        let tx = TokenUpdateTransaction::new(TokenId::from_num(7))
            .name("renamed")
            .memo("new memo");
        let fields = tx.get_fields();
        assert_eq!(fields.name.as_deref(), Some("renamed"));
        assert_eq!(fields.memo.as_deref(), Some("new memo"));
        assert!(fields.symbol.is_none());
        assert!(fields.treasury_account_id.is_none());
        assert!(fields.admin_key.is_none());
    }

    #[test]
    fn empty_fields_detected() {
        assert!(TokenUpdateFields::default().is_empty());
        let fields = TokenUpdateFields {
            symbol: Some("X".into()),
            ..Default::default()
        };
        assert!(!fields.is_empty());
    }
}
