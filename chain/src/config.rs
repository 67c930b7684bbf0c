//! Chain configuration with TOML file support.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::path::Path;

use nameflow_types::ChainId;

use crate::error::ChainError;

/// The ENS registry deployment, shared by every supported chain.
pub const ENS_REGISTRY: Address = address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e");

const NAME_WRAPPER_MAINNET: Address = address!("D4416b13d2b3a9aBae7AcD5D6C2BbDBE25686401");
const NAME_WRAPPER_SEPOLIA: Address = address!("0635513f179D50A207757E05759CbD106d7dFcE8");
const NAME_WRAPPER_HOLESKY: Address = address!("ab50971078225D365994dc1Edcb9b7FD72Bb4862");

/// Configuration for one chain connection.
///
/// Can be loaded from a TOML file via [`ChainConfig::from_toml_file`] or
/// built from the per-chain defaults (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Which chain to talk to.
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,

    /// JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    /// ENS registry address.
    #[serde(default = "default_registry")]
    pub registry: Address,

    /// NameWrapper address.
    #[serde(default = "default_name_wrapper")]
    pub name_wrapper: Address,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ChainConfig {
    pub fn mainnet() -> Self {
        Self {
            chain_id: ChainId::MAINNET,
            rpc_url: "https://eth.drpc.org".to_string(),
            registry: ENS_REGISTRY,
            name_wrapper: NAME_WRAPPER_MAINNET,
            timeout_secs: default_timeout_secs(),
        }
    }

    pub fn sepolia() -> Self {
        Self {
            chain_id: ChainId::SEPOLIA,
            rpc_url: "https://sepolia.drpc.org".to_string(),
            name_wrapper: NAME_WRAPPER_SEPOLIA,
            ..Self::mainnet()
        }
    }

    pub fn holesky() -> Self {
        Self {
            chain_id: ChainId::HOLESKY,
            rpc_url: "https://holesky.drpc.org".to_string(),
            name_wrapper: NAME_WRAPPER_HOLESKY,
            ..Self::mainnet()
        }
    }

    /// Built-in defaults for a supported chain.
    pub fn for_chain(chain_id: ChainId) -> Result<Self, ChainError> {
        match chain_id {
            ChainId::MAINNET => Ok(Self::mainnet()),
            ChainId::SEPOLIA => Ok(Self::sepolia()),
            ChainId::HOLESKY => Ok(Self::holesky()),
            other => Err(ChainError::UnsupportedChain(other)),
        }
    }

    /// Load configuration from a TOML file. Missing fields fall back to the
    /// mainnet defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ChainError::Config(format!("read failed: {e}")))?;
        toml::from_str(&raw).map_err(|e| ChainError::Config(format!("parse failed: {e}")))
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_chain_id() -> ChainId {
    ChainId::MAINNET
}

fn default_rpc_url() -> String {
    ChainConfig::mainnet().rpc_url
}

fn default_registry() -> Address {
    ENS_REGISTRY
}

fn default_name_wrapper() -> Address {
    NAME_WRAPPER_MAINNET
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn per_chain_defaults() {
        assert_eq!(ChainConfig::mainnet().chain_id, ChainId::MAINNET);
        assert_eq!(ChainConfig::sepolia().name_wrapper, NAME_WRAPPER_SEPOLIA);
        assert_eq!(ChainConfig::holesky().registry, ENS_REGISTRY);
        assert!(ChainConfig::for_chain(ChainId(42)).is_err());
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
chain_id = 11155111
rpc_url = "http://127.0.0.1:8545"
"#
        )
        .unwrap();

        let config = ChainConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.chain_id, ChainId::SEPOLIA);
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        // Unspecified fields keep their defaults.
        assert_eq!(config.registry, ENS_REGISTRY);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ChainConfig::from_toml_file("/nonexistent/nameflow.toml").unwrap_err();
        assert!(matches!(err, ChainError::Config(_)));
    }
}
