use crate::amount::Hbar;
use crate::error::{Error, Result};
use entity_id::AccountId;
use serde::{Deserialize, Serialize};

/// A custom fee charged on token transfers.
///
/// The collector is optional at construction time; [`prepare_fees`] fills
/// unset collectors with the creating account before the fee list goes
/// into a creation transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CustomFee {
    Fixed {
        amount: Hbar,
        collector: Option<AccountId>,
    },
    Royalty {
        numerator: u64,
        denominator: u64,
        /// Charged instead of the fraction when the transfer carries no value.
        fallback: Option<Hbar>,
        collector: Option<AccountId>,
    },
}

impl CustomFee {
    pub fn collector(&self) -> Option<&AccountId> {
        match self {
            CustomFee::Fixed { collector, .. } | CustomFee::Royalty { collector, .. } => {
                collector.as_ref()
            }
        }
    }

    fn with_collector(self, account_id: AccountId) -> Self {
        match self {
            CustomFee::Fixed { amount, .. } => CustomFee::Fixed {
                amount,
                collector: Some(account_id),
            },
            CustomFee::Royalty {
                numerator,
                denominator,
                fallback,
                ..
            } => CustomFee::Royalty {
                numerator,
                denominator,
                fallback,
                collector: Some(account_id),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if let CustomFee::Royalty { denominator: 0, .. } = self {
            return Err(Error::ZeroFeeDenominator);
        }
        Ok(())
    }
}

/// Default every fee's collector to `default_collector` where unset.
pub fn prepare_fees(fees: Vec<CustomFee>, default_collector: AccountId) -> Result<Vec<CustomFee>> {
    fees.into_iter()
        .map(|fee| {
            fee.validate()?;
            Ok(if fee.collector().is_none() {
                fee.with_collector(default_collector)
            } else {
                fee
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_collector_defaults_to_creator() {
        let creator = AccountId::from_num(101);
        let other = AccountId::from_num(202);
        let fees = vec![
            CustomFee::Fixed {
                amount: Hbar::from_hbars(1),
                collector: None,
            },
            CustomFee::Royalty {
                numerator: 5,
                denominator: 100,
                fallback: Some(Hbar::from_hbars(2)),
                collector: Some(other),
            },
        ];

        let prepared = prepare_fees(fees, creator).unwrap();
        assert_eq!(prepared[0].collector(), Some(&creator));
        assert_eq!(prepared[1].collector(), Some(&other));
    }

    #[test]
    fn zero_denominator_rejected() {
        let fees = vec![CustomFee::Royalty {
            numerator: 1,
            denominator: 0,
            fallback: None,
            collector: None,
        }];
        assert!(matches!(
            prepare_fees(fees, AccountId::from_num(1)),
            Err(Error::ZeroFeeDenominator)
        ));
    }
}
