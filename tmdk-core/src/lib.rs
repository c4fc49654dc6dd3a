mod amount;
mod error;
mod fees;
mod keys;
mod lookup;
mod network;
mod timestamp;
mod transaction;

pub use entity_id;
pub use entity_id::{AccountId, EntityId, NftId, TokenId};

pub use amount::{Hbar, TINYBARS_PER_HBAR};
pub use error::{Error, Result};
pub use fees::{prepare_fees, CustomFee};
pub use keys::{KeyRole, PublicKey, TokenKeys};
pub use lookup::AccountLookup;
pub use network::Network;
pub use timestamp::{Timestamp, MONTH_IN_SECONDS};
pub use transaction::*;
