use crate::amount::Hbar;
use crate::error::{Error, Result};
use entity_id::{AccountId, NftId};
use serde::{Deserialize, Serialize};

/// Ownership change of one non-fungible unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransfer {
    pub nft_id: NftId,
    pub sender: AccountId,
    pub receiver: AccountId,
}

/// Moves hbar and non-fungible units between accounts in one atomic
/// transaction.
///
/// The hbar legs must net to zero across all parties (double-entry
/// conservation); [`TransferTransaction::check_balanced`] enforces this
/// before the transaction can be frozen or submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferTransaction {
    hbar_transfers: Vec<(AccountId, Hbar)>,
    nft_transfers: Vec<NftTransfer>,
}

impl TransferTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an hbar leg; negative amounts debit, positive credit.
    pub fn hbar_transfer(mut self, account_id: AccountId, amount: Hbar) -> Self {
        self.hbar_transfers.push((account_id, amount));
        self
    }

    pub fn nft_transfer(mut self, nft_id: NftId, sender: AccountId, receiver: AccountId) -> Self {
        self.nft_transfers.push(NftTransfer {
            nft_id,
            sender,
            receiver,
        });
        self
    }

    pub fn get_hbar_transfers(&self) -> &[(AccountId, Hbar)] {
        &self.hbar_transfers
    }

    pub fn get_nft_transfers(&self) -> &[NftTransfer] {
        &self.nft_transfers
    }

    pub fn net_tinybars(&self) -> i64 {
        self.hbar_transfers
            .iter()
            .map(|(_, amount)| amount.to_tinybars())
            .sum()
    }

    pub fn check_balanced(&self) -> Result<()> {
        match self.net_tinybars() {
            0 => Ok(()),
            net => Err(Error::UnbalancedTransfer(net)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity_id::TokenId;

    #[test]
    fn balanced_legs_pass() {
        let tx = TransferTransaction::new()
            .hbar_transfer(AccountId::from_num(1), Hbar::from_tinybars(-1000))
            .hbar_transfer(AccountId::from_num(2), Hbar::from_tinybars(1000));
        assert!(tx.check_balanced().is_ok());
    }

    #[test]
    fn unbalanced_legs_fail_with_net() {
        let tx = TransferTransaction::new()
            .hbar_transfer(AccountId::from_num(1), Hbar::from_tinybars(-1000))
            .hbar_transfer(AccountId::from_num(2), Hbar::from_tinybars(900));
        assert!(matches!(
            tx.check_balanced(),
            Err(Error::UnbalancedTransfer(-100))
        ));
    }

    #[test]
    fn nft_only_transfer_is_balanced() {
        let tx = TransferTransaction::new().nft_transfer(
            NftId::new(TokenId::from_num(7), 5),
            AccountId::from_num(1),
            AccountId::from_num(2),
        );
        assert!(tx.check_balanced().is_ok());
        assert_eq!(tx.get_nft_transfers().len(), 1);
    }
}
