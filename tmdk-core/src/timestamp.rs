use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// One ledger month, 30 days.
pub const MONTH_IN_SECONDS: u64 = 2_592_000;

/// An instant as seconds and nanoseconds since the Unix epoch.
///
/// Rendered as `seconds.nanos` with nanos zero-padded to nine digits,
/// matching the wire form used inside transaction identifiers.
#[derive(
    Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Timestamp {
    pub seconds: u64,
    pub nanos: u32,
}

impl Timestamp {
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: since_epoch.as_secs(),
            nanos: since_epoch.subsec_nanos(),
        }
    }

    pub const fn from_seconds(seconds: u64) -> Self {
        Self { seconds, nanos: 0 }
    }

    pub const fn plus_seconds(self, seconds: u64) -> Self {
        Self {
            seconds: self.seconds + seconds,
            nanos: self.nanos,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}
