use nameflow_types::ChainId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("rpc endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("no built-in configuration for chain {0}")]
    UnsupportedChain(ChainId),

    #[error("config error: {0}")]
    Config(String),
}
