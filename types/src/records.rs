//! Resolver record types.
//!
//! A [`RecordSet`] describes one resolver update: which records to write and
//! whether the existing profile is wiped first. It is the payload of the
//! `ResetProfileWithRecords` transaction descriptor and of prepared record
//! updates.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A SLIP-44 coin type for multi-coin address records.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CoinType(pub u64);

impl CoinType {
    pub const BTC: Self = Self(0);
    pub const ETH: Self = Self(60);

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BTC => write!(f, "BTC"),
            Self::ETH => write!(f, "ETH"),
            Self(other) => write!(f, "coin-{other}"),
        }
    }
}

/// A multi-coin address record: a coin type plus its encoded address payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub coin: CoinType,
    pub value: Bytes,
}

impl AddressRecord {
    /// An ETH address record (coin type 60, 20-byte payload).
    pub fn eth(address: Address) -> Self {
        Self {
            coin: CoinType::ETH,
            value: Bytes::copy_from_slice(address.as_slice()),
        }
    }
}

/// A text record (`avatar`, `com.twitter`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub key: String,
    pub value: String,
}

impl TextRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The set of records a single resolver update writes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Wipe all existing records before applying the rest of the set.
    #[serde(default)]
    pub clear_records: bool,
    #[serde(default)]
    pub coins: Vec<AddressRecord>,
    #[serde(default)]
    pub texts: Vec<TextRecord>,
    #[serde(default)]
    pub content_hash: Option<Bytes>,
}

impl RecordSet {
    /// The reset-profile set: clear everything, then set the ETH address.
    pub fn reset_with_eth(address: Address) -> Self {
        Self {
            clear_records: true,
            coins: vec![AddressRecord::eth(address)],
            ..Default::default()
        }
    }

    /// Whether the set performs no writes at all.
    pub fn is_empty(&self) -> bool {
        !self.clear_records
            && self.coins.is_empty()
            && self.texts.is_empty()
            && self.content_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn eth_record_payload_is_the_address_bytes() {
        let addr = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let record = AddressRecord::eth(addr);
        assert_eq!(record.coin, CoinType::ETH);
        assert_eq!(record.value.as_ref(), addr.as_slice());
    }

    #[test]
    fn reset_with_eth_clears_and_sets_one_coin() {
        let addr = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let set = RecordSet::reset_with_eth(addr);
        assert!(set.clear_records);
        assert_eq!(set.coins.len(), 1);
        assert!(set.texts.is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn empty_set_detection() {
        assert!(RecordSet::default().is_empty());
        let mut set = RecordSet::default();
        set.clear_records = true;
        assert!(!set.is_empty());
    }
}
