//! Shared error type for names and chain identifiers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,

    #[error("name contains an empty label: {name:?}")]
    EmptyLabel { name: String },

    #[error("unknown chain: {0}")]
    UnknownChain(String),
}
