//! Chain access for nameflow.
//!
//! The contract-call boundary: a typed eth JSON-RPC client, the ENS contract
//! ABIs it speaks, and per-chain configuration.

pub mod abi;
pub mod client;
pub mod config;
pub mod error;

pub use client::RpcClient;
pub use config::{ChainConfig, ENS_REGISTRY};
pub use error::ChainError;
