use tmdk_core::{
    prepare_fees, AccountId, AccountLookup, AnyTransaction, CustomFee, FrozenTransaction, Hbar,
    KeyRole, NftId, PublicKey, Result, Timestamp, TokenCreateTransaction, TokenId, TokenKeys,
    TokenMintTransaction, TokenUpdateFields, TokenUpdateTransaction, TransferTransaction,
    DEFAULT_NODE_ACCOUNT, MONTH_IN_SECONDS,
};

pub const DEFAULT_MAX_TRANSACTION_FEE: Hbar = Hbar::from_hbars(50);

/// Tokens are created with a 3-month lifetime and auto-renew period.
const TOKEN_LIFETIME_SECONDS: u64 = MONTH_IN_SECONDS * 3;

const IPFS_PREFIX: &str = "ipfs://";

/// Parameters for creating a new non-fungible token class.
///
/// `account_id` is the connected wallet's account: it becomes the
/// treasury, the auto-renew account, the default fee collector, and the
/// owner of every requested key role.
#[derive(Clone, Debug)]
pub struct CreateTokenParams {
    pub account_id: AccountId,
    pub token_name: String,
    pub token_symbol: String,
    /// Finite-supply cap; units are minted individually afterwards.
    pub supply: u64,
    /// Pause key supplied directly instead of derived from the account.
    pub pause_key: Option<PublicKey>,
    pub custom_fees: Vec<CustomFee>,
    pub key_roles: Vec<KeyRole>,
}

/// Builds token-service transactions.
///
/// Everything here is pure construction except [`Self::create_token`],
/// which resolves the creating account's public key through the lookup
/// backend before assembling the request.
pub struct TokenService<L: AccountLookup> {
    lookup: L,
}

impl<L: AccountLookup> TokenService<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Build an unsigned token creation request.
    ///
    /// Fails with [`tmdk_core::Error::MissingPublicKey`] when the account's
    /// key cannot be resolved; no transaction is produced in that case.
    pub async fn create_token(&self, params: CreateTokenParams) -> Result<TokenCreateTransaction> {
        let account_key = self.lookup.account_public_key(&params.account_id).await?;

        let expiration_time = Timestamp::now().plus_seconds(TOKEN_LIFETIME_SECONDS);

        let mut keys = TokenKeys::assign(&params.key_roles, &account_key);
        if let Some(pause_key) = params.pause_key {
            keys = keys.with(KeyRole::Pause, pause_key);
        }

        let custom_fees = prepare_fees(params.custom_fees, params.account_id)?;

        Ok(TokenCreateTransaction::non_fungible_unique(
            params.token_name,
            params.token_symbol,
            params.account_id,
        )
        .max_supply(params.supply)
        .expiration_time(expiration_time)
        .auto_renew_account_id(params.account_id)
        .auto_renew_period(TOKEN_LIFETIME_SECONDS)
        .max_transaction_fee(DEFAULT_MAX_TRANSACTION_FEE)
        .custom_fees(custom_fees)
        .keys(keys))
    }

    /// Build a mint request: one `ipfs://{cid}` metadata entry per unit.
    pub fn mint_token(&self, token_id: TokenId, cids: &[String]) -> TokenMintTransaction {
        let metadata = cids
            .iter()
            .map(|cid| format!("{IPFS_PREFIX}{cid}").into_bytes())
            .collect();

        TokenMintTransaction::new().token_id(token_id).metadata(metadata)
    }

    /// Build and finalize a partial token update in one pass.
    pub fn update_token(
        &self,
        token_id: TokenId,
        payer: AccountId,
        changes: TokenUpdateFields,
    ) -> Result<FrozenTransaction> {
        AnyTransaction::from(TokenUpdateTransaction::new(token_id).fields(changes))
            .freeze_with(payer, DEFAULT_NODE_ACCOUNT)
    }

    /// Ownership transfer of one serial, left unfrozen so the session
    /// layer can attach routing before signing.
    pub fn send_nft(
        &self,
        token_id: TokenId,
        serial: u64,
        sender: AccountId,
        receiver: AccountId,
    ) -> TransferTransaction {
        TransferTransaction::new().nft_transfer(NftId::new(token_id, serial), sender, receiver)
    }

    /// As [`Self::send_nft`], with a paired value transfer: the sender is
    /// debited `price` and the receiver credited the same amount.
    pub fn send_nft_with_value(
        &self,
        token_id: TokenId,
        serial: u64,
        sender: AccountId,
        receiver: AccountId,
        price: Hbar,
    ) -> TransferTransaction {
        self.send_nft(token_id, serial, sender, receiver)
            .hbar_transfer(sender, -price)
            .hbar_transfer(receiver, price)
    }

    /// Finalized value transfer between two accounts, paid by the sender.
    pub fn transfer(
        &self,
        from: AccountId,
        to: AccountId,
        amount: Hbar,
    ) -> Result<FrozenTransaction> {
        AnyTransaction::from(
            TransferTransaction::new()
                .hbar_transfer(from, -amount)
                .hbar_transfer(to, amount),
        )
        .freeze_with(from, DEFAULT_NODE_ACCOUNT)
    }
}
