use thiserror::Error;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("input is not an ENS name: {name:?}")]
    NotAnEnsName { name: String },

    #[error("no resolver found for {name}")]
    NoResolver { name: String },

    #[error("no signer found")]
    NoSigner,

    #[error("record set is empty")]
    EmptyRecordSet,

    #[error("chain error: {0}")]
    Chain(#[from] nameflow_chain::ChainError),
}
