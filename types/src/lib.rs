//! Fundamental types for nameflow.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: ENS names and their EIP-137 hashes, chain identifiers, and the
//! record types written to a name's resolver.

pub mod chain;
pub mod error;
pub mod name;
pub mod records;

pub use chain::ChainId;
pub use error::NameError;
pub use name::{labelhash, EnsName};
pub use records::{AddressRecord, CoinType, RecordSet, TextRecord};
