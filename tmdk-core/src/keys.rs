use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Public key material as exposed by the mirror node: hex-encoded bytes.
///
/// This layer never signs anything, so the key is kept opaque; the wallet
/// connector that ultimately signs knows the concrete curve.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl PublicKey {
    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self {
            bytes: hex::decode(s)?,
        })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Authority roles a token can delegate to a key.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    Admin,
    Kyc,
    Freeze,
    Wipe,
    Supply,
    FeeSchedule,
    Pause,
}

impl KeyRole {
    pub const ALL: [KeyRole; 7] = [
        KeyRole::Admin,
        KeyRole::Kyc,
        KeyRole::Freeze,
        KeyRole::Wipe,
        KeyRole::Supply,
        KeyRole::FeeSchedule,
        KeyRole::Pause,
    ];
}

impl TryFrom<&str> for KeyRole {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let res = match value {
            "admin" => Self::Admin,
            "kyc" => Self::Kyc,
            "freeze" => Self::Freeze,
            "wipe" => Self::Wipe,
            "supply" => Self::Supply,
            "fee_schedule" => Self::FeeSchedule,
            "pause" => Self::Pause,
            _ => return Err(Error::UnknownKeyRole(value.to_string())),
        };
        Ok(res)
    }
}

/// The key set attached to a token at creation or update time.
///
/// Absent roles stay unset on the ledger, which makes the corresponding
/// operation permanently unavailable for that token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenKeys {
    pub admin: Option<PublicKey>,
    pub kyc: Option<PublicKey>,
    pub freeze: Option<PublicKey>,
    pub wipe: Option<PublicKey>,
    pub supply: Option<PublicKey>,
    pub fee_schedule: Option<PublicKey>,
    pub pause: Option<PublicKey>,
}

impl TokenKeys {
    /// Assign `key` to every requested role, leaving the rest unset.
    pub fn assign(roles: &[KeyRole], key: &PublicKey) -> Self {
        let mut keys = Self::default();
        for role in roles {
            keys = keys.with(*role, key.clone());
        }
        keys
    }

    pub fn with(mut self, role: KeyRole, key: PublicKey) -> Self {
        *self.slot_mut(role) = Some(key);
        self
    }

    pub fn get(&self, role: KeyRole) -> Option<&PublicKey> {
        match role {
            KeyRole::Admin => self.admin.as_ref(),
            KeyRole::Kyc => self.kyc.as_ref(),
            KeyRole::Freeze => self.freeze.as_ref(),
            KeyRole::Wipe => self.wipe.as_ref(),
            KeyRole::Supply => self.supply.as_ref(),
            KeyRole::FeeSchedule => self.fee_schedule.as_ref(),
            KeyRole::Pause => self.pause.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        KeyRole::ALL.iter().all(|r| self.get(*r).is_none())
    }

    fn slot_mut(&mut self, role: KeyRole) -> &mut Option<PublicKey> {
        match role {
            KeyRole::Admin => &mut self.admin,
            KeyRole::Kyc => &mut self.kyc,
            KeyRole::Freeze => &mut self.freeze,
            KeyRole::Wipe => &mut self.wipe,
            KeyRole::Supply => &mut self.supply,
            KeyRole::FeeSchedule => &mut self.fee_schedule,
            KeyRole::Pause => &mut self.pause,
        }
    }
}
