//! ENS name type with EIP-137 hashing.

use alloy_primitives::{keccak256, B256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// The pseudo-name the manager UI uses for the registry root.
pub const ROOT_NOTATION: &str = "[root]";

/// A validated ENS name, e.g. `nick.eth`.
///
/// Labels are dot-separated and must be non-empty. The registry root is
/// represented by the `[root]` pseudo-name, never by an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnsName(String);

impl EnsName {
    /// Parse a raw string into a validated name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, NameError> {
        let s = raw.into();
        if s == ROOT_NOTATION {
            return Ok(Self(s));
        }
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if s.split('.').any(|label| label.is_empty()) {
            return Err(NameError::EmptyLabel { name: s });
        }
        Ok(Self(s))
    }

    /// The raw name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leftmost label (`nick` for `nick.eth`).
    pub fn label(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// Parent name (`eth` for `nick.eth`), `None` for a TLD or the root.
    pub fn parent(&self) -> Option<EnsName> {
        self.0.split_once('.').map(|(_, rest)| Self(rest.to_string()))
    }

    /// Whether this is a single-label top-level name (e.g. `eth`).
    pub fn is_tld(&self) -> bool {
        !self.is_root_notation() && !self.0.contains('.')
    }

    /// Whether this is the `[root]` pseudo-name.
    pub fn is_root_notation(&self) -> bool {
        self.0 == ROOT_NOTATION
    }

    /// EIP-137 namehash of this name.
    ///
    /// Folds labels right-to-left:
    /// `node = keccak256(node || keccak256(label))`, starting from 32 zero
    /// bytes. The root hashes to all zeros.
    pub fn namehash(&self) -> B256 {
        if self.is_root_notation() {
            return B256::ZERO;
        }
        let mut node = B256::ZERO;
        for label in self.0.rsplit('.') {
            let mut buf = [0u8; 64];
            buf[..32].copy_from_slice(node.as_slice());
            buf[32..].copy_from_slice(labelhash(label).as_slice());
            node = keccak256(buf);
        }
        node
    }
}

/// EIP-137 labelhash: `keccak256` of a single label.
pub fn labelhash(label: &str) -> B256 {
    keccak256(label.as_bytes())
}

impl fmt::Display for EnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EnsName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EnsName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<EnsName> for String {
    fn from(name: EnsName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_empty_and_empty_labels() {
        assert!(EnsName::parse("").is_err());
        assert!(EnsName::parse(".eth").is_err());
        assert!(EnsName::parse("nick..eth").is_err());
        assert!(EnsName::parse("nick.eth.").is_err());
    }

    #[test]
    fn parse_accepts_root_notation() {
        let root = EnsName::parse(ROOT_NOTATION).unwrap();
        assert!(root.is_root_notation());
        assert_eq!(root.namehash(), B256::ZERO);
        assert!(root.parent().is_none());
    }

    #[test]
    fn label_and_parent() {
        let name = EnsName::parse("sub.nick.eth").unwrap();
        assert_eq!(name.label(), "sub");
        assert_eq!(name.parent().unwrap().as_str(), "nick.eth");
        assert_eq!(name.parent().unwrap().parent().unwrap().as_str(), "eth");
        assert!(name.parent().unwrap().parent().unwrap().is_tld());
    }

    // EIP-137 reference vectors.
    #[test]
    fn namehash_vectors() {
        let eth = EnsName::parse("eth").unwrap();
        assert_eq!(
            eth.namehash(),
            "0x93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
                .parse::<B256>()
                .unwrap()
        );

        let foo_eth = EnsName::parse("foo.eth").unwrap();
        assert_eq!(
            foo_eth.namehash(),
            "0xde9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
                .parse::<B256>()
                .unwrap()
        );
    }

    #[test]
    fn labelhash_vector() {
        assert_eq!(
            labelhash("eth"),
            "0x4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"
                .parse::<B256>()
                .unwrap()
        );
    }
}
