use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// A signed amount of the network's native currency, stored in tinybars.
///
/// Signed because transfer lists carry debits as negative amounts; the
/// ledger requires every transfer list to net to zero.
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hbar(i64);

impl Hbar {
    pub const ZERO: Hbar = Hbar(0);

    pub const fn from_hbars(hbars: i64) -> Self {
        Hbar(hbars * TINYBARS_PER_HBAR)
    }

    pub const fn from_tinybars(tinybars: i64) -> Self {
        Hbar(tinybars)
    }

    pub const fn to_tinybars(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Neg for Hbar {
    type Output = Hbar;

    fn neg(self) -> Hbar {
        Hbar(-self.0)
    }
}

impl std::ops::Add for Hbar {
    type Output = Hbar;

    fn add(self, rhs: Hbar) -> Hbar {
        Hbar(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Hbar {
    fn sum<I: Iterator<Item = Hbar>>(iter: I) -> Self {
        iter.fold(Hbar::ZERO, |acc, x| acc + x)
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 % TINYBARS_PER_HBAR == 0 {
            write!(f, "{} ℏ", self.0 / TINYBARS_PER_HBAR)
        } else {
            write!(f, "{} tℏ", self.0)
        }
    }
}
