use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ledger network a client talks to.
///
/// Selects which mirror-node host is queried for account state. Mainnet
/// exposes its public mirror under a dedicated `mainnet-public` host; the
/// other networks use the network name as host.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Previewnet,
}

impl Network {
    pub fn mirror_base_url(&self) -> String {
        let host = match self {
            Network::Mainnet => "mainnet-public",
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
        };
        format!("https://{}.mirrornode.hedera.com", host)
    }
}

impl From<Network> for &str {
    fn from(value: Network) -> Self {
        match value {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Previewnet => "previewnet",
        }
    }
}

impl TryFrom<&str> for Network {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let res = match value {
            "mainnet" | "main" => Self::Mainnet,
            "testnet" | "test" => Self::Testnet,
            "previewnet" => Self::Previewnet,
            _ => return Err(Error::UnknownNetwork(value.to_string())),
        };
        Ok(res)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: &str = (*self).into();
        write!(f, "{}", s)
    }
}
