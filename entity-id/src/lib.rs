use std::convert::TryFrom;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error types for entity id parsing.
#[derive(Debug)]
pub enum Error {
    InvalidFormat(String),
    InvalidComponent(String, std::num::ParseIntError),
    InvalidSerial(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidFormat(s) => write!(f, "Invalid entity id format: {}", s),
            Error::InvalidComponent(s, e) => write!(f, "Invalid entity id component {}: {}", s, e),
            Error::InvalidSerial(s) => write!(f, "Invalid NFT serial: {}", s),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A ledger entity identifier in `shard.realm.num` form, e.g. `0.0.1234`.
///
/// All addressable entities (accounts, tokens, files, contracts) share this
/// triple; the wrapper types below fix the entity kind at the type level.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityId {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Entity number in the default shard and realm (`0.0.num`).
    pub const fn from_num(num: u64) -> Self {
        Self::new(0, 0, num)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl TryFrom<&str> for EntityId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        let mut parts = s.split('.');
        let (shard, realm, num) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(shard), Some(realm), Some(num), None) => (shard, realm, num),
            _ => return Err(Error::InvalidFormat(s.to_string())),
        };

        let parse = |part: &str| {
            part.parse::<u64>()
                .map_err(|e| Error::InvalidComponent(part.to_string(), e))
        };

        Ok(Self {
            shard: parse(shard)?,
            realm: parse(realm)?,
            num: parse(num)?,
        })
    }
}

impl TryFrom<String> for EntityId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.as_str().try_into()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.to_string()
    }
}

macro_rules! entity_wrapper {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(pub EntityId);

        impl $name {
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self(EntityId::new(shard, realm, num))
            }

            pub const fn from_num(num: u64) -> Self {
                Self(EntityId::from_num(num))
            }

            pub const fn num(&self) -> u64 {
                self.0.num
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = Error;

            fn try_from(s: &str) -> Result<Self> {
                EntityId::try_from(s).map(Self)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                EntityId::try_from(s.as_str()).map(Self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.try_into()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.to_string()
            }
        }

        impl From<EntityId> for $name {
            fn from(id: EntityId) -> Self {
                Self(id)
            }
        }

        #[cfg(feature = "serde")]
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.try_into().map_err(serde::de::Error::custom)
            }
        }
    };
}

entity_wrapper! {
    /// An account identifier, e.g. `0.0.5830192`.
    AccountId
}

entity_wrapper! {
    /// A token class identifier, e.g. `0.0.7125092`.
    TokenId
}

/// A single non-fungible unit: token class plus serial number.
///
/// The canonical string form is `token_id/serial`, e.g. `0.0.7125092/5`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NftId {
    pub token_id: TokenId,
    pub serial: u64,
}

impl NftId {
    pub const fn new(token_id: TokenId, serial: u64) -> Self {
        Self { token_id, serial }
    }
}

impl fmt::Display for NftId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.token_id, self.serial)
    }
}

impl TryFrom<&str> for NftId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        let (token, serial) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidFormat(s.to_string()))?;
        let token_id = TokenId::try_from(token)?;
        let serial = serial
            .parse::<u64>()
            .map_err(|_| Error::InvalidSerial(serial.to_string()))?;
        Ok(Self { token_id, serial })
    }
}

impl From<NftId> for String {
    fn from(id: NftId) -> Self {
        id.to_string()
    }
}

#[cfg(feature = "serde")]
impl Serialize for NftId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NftId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.as_str().try_into().map_err(serde::de::Error::custom)
    }
}
