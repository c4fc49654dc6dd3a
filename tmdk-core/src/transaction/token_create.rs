use crate::amount::Hbar;
use crate::fees::CustomFee;
use crate::keys::TokenKeys;
use crate::timestamp::Timestamp;
use entity_id::AccountId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    FungibleCommon,
    NonFungibleUnique,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSupplyType {
    Infinite,
    Finite,
}

/// Creates a new token class on the ledger.
///
/// The non-fungible constructor fixes type, supply type and decimals:
/// non-fungible units are indivisible and minted one at a time, so
/// decimals are always zero and the initial supply starts at zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenCreateTransaction {
    name: String,
    symbol: String,
    treasury_account_id: AccountId,
    token_type: TokenType,
    supply_type: TokenSupplyType,
    decimals: u32,
    initial_supply: u64,
    max_supply: Option<u64>,
    expiration_time: Option<Timestamp>,
    auto_renew_account_id: Option<AccountId>,
    auto_renew_period: Option<u64>,
    max_transaction_fee: Option<Hbar>,
    custom_fees: Vec<CustomFee>,
    keys: TokenKeys,
}

impl TokenCreateTransaction {
    pub fn non_fungible_unique(
        name: impl Into<String>,
        symbol: impl Into<String>,
        treasury_account_id: AccountId,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            treasury_account_id,
            token_type: TokenType::NonFungibleUnique,
            supply_type: TokenSupplyType::Finite,
            decimals: 0,
            initial_supply: 0,
            max_supply: None,
            expiration_time: None,
            auto_renew_account_id: None,
            auto_renew_period: None,
            max_transaction_fee: None,
            custom_fees: Vec::new(),
            keys: TokenKeys::default(),
        }
    }

    pub fn max_supply(mut self, max_supply: u64) -> Self {
        self.max_supply = Some(max_supply);
        self
    }

    pub fn expiration_time(mut self, expiration_time: Timestamp) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    pub fn auto_renew_account_id(mut self, account_id: AccountId) -> Self {
        self.auto_renew_account_id = Some(account_id);
        self
    }

    pub fn auto_renew_period(mut self, seconds: u64) -> Self {
        self.auto_renew_period = Some(seconds);
        self
    }

    pub fn max_transaction_fee(mut self, fee: Hbar) -> Self {
        self.max_transaction_fee = Some(fee);
        self
    }

    pub fn custom_fees(mut self, fees: Vec<CustomFee>) -> Self {
        self.custom_fees = fees;
        self
    }

    pub fn keys(mut self, keys: TokenKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn get_treasury_account_id(&self) -> &AccountId {
        &self.treasury_account_id
    }

    pub fn get_token_type(&self) -> TokenType {
        self.token_type
    }

    pub fn get_supply_type(&self) -> TokenSupplyType {
        self.supply_type
    }

    pub fn get_decimals(&self) -> u32 {
        self.decimals
    }

    pub fn get_initial_supply(&self) -> u64 {
        self.initial_supply
    }

    pub fn get_max_supply(&self) -> Option<u64> {
        self.max_supply
    }

    pub fn get_expiration_time(&self) -> Option<Timestamp> {
        self.expiration_time
    }

    pub fn get_auto_renew_account_id(&self) -> Option<&AccountId> {
        self.auto_renew_account_id.as_ref()
    }

    pub fn get_auto_renew_period(&self) -> Option<u64> {
        self.auto_renew_period
    }

    pub fn get_max_transaction_fee(&self) -> Option<Hbar> {
        self.max_transaction_fee
    }

    pub fn get_custom_fees(&self) -> &[CustomFee] {
        &self.custom_fees
    }

    pub fn get_keys(&self) -> &TokenKeys {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_fungible_constructor_fixes_semantics() {
        let tx = TokenCreateTransaction::non_fungible_unique(
            "My Collection",
            "MC",
            AccountId::from_num(1001),
        );
        assert_eq!(tx.get_token_type(), TokenType::NonFungibleUnique);
        assert_eq!(tx.get_supply_type(), TokenSupplyType::Finite);
        assert_eq!(tx.get_decimals(), 0);
        assert_eq!(tx.get_initial_supply(), 0);
    }

    #[test]
    fn chaining_sets_optional_fields() {
        let tx = TokenCreateTransaction::non_fungible_unique("n", "s", AccountId::from_num(1))
            .max_supply(100)
            .max_transaction_fee(Hbar::from_hbars(50))
            .auto_renew_account_id(AccountId::from_num(1))
            .auto_renew_period(7_776_000);
        assert_eq!(tx.get_max_supply(), Some(100));
        assert_eq!(tx.get_max_transaction_fee(), Some(Hbar::from_hbars(50)));
        assert_eq!(tx.get_auto_renew_period(), Some(7_776_000));
    }
}
