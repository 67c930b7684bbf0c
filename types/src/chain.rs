//! EVM chain identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// An EVM chain id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const MAINNET: Self = Self(1);
    pub const SEPOLIA: Self = Self(11155111);
    pub const HOLESKY: Self = Self(17000);

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Short chain name for known chains, `"unknown"` otherwise.
    pub fn name(&self) -> &'static str {
        match *self {
            Self::MAINNET => "mainnet",
            Self::SEPOLIA => "sepolia",
            Self::HOLESKY => "holesky",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "unknown" => write!(f, "chain-{}", self.0),
            known => write!(f, "{known}"),
        }
    }
}

impl FromStr for ChainId {
    type Err = NameError;

    /// Accepts a known chain name (`mainnet`, `sepolia`, `holesky`) or a
    /// numeric chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::MAINNET),
            "sepolia" => Ok(Self::SEPOLIA),
            "holesky" => Ok(Self::HOLESKY),
            other => other
                .parse::<u64>()
                .map(Self)
                .map_err(|_| NameError::UnknownChain(other.to_string())),
        }
    }
}
