mod flow;
mod service;
mod session;

// re-export traits for consumers who need to provide valid implementors
pub use tmdk_core::AccountLookup;

// re-export the core crate for consumers
pub use tmdk_core;

pub use flow::MintFlow;
pub use service::{CreateTokenParams, TokenService, DEFAULT_MAX_TRANSACTION_FEE};
pub use session::{SubmitResult, TransactionRequest, WalletSession};
