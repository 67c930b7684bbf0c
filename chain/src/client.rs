//! JSON-RPC client for the contract-call boundary.

use std::time::Duration;

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use nameflow_types::EnsName;

use crate::abi::{EnsRegistry, Erc165, NameWrapper};
use crate::config::ChainConfig;
use crate::error::ChainError;

/// HTTP client for eth JSON-RPC.
///
/// Wraps `reqwest::Client` with the chain's RPC URL and provides typed
/// helpers for the contract calls nameflow needs.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    config: ChainConfig,
}

impl RpcClient {
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ChainError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Send one JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ChainError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.config.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChainError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChainError::HttpStatus(response.status().as_u16()));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;

        if let Some(err) = envelope.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        envelope
            .result
            .ok_or_else(|| ChainError::InvalidResponse("missing result".into()))
    }

    /// `eth_call` against `to`, returning the raw return data.
    pub async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
        let result = self
            .rpc_call("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await?;
        decode_bytes(&result)
    }

    /// `eth_estimateGas` for a write from `from`.
    pub async fn estimate_gas(
        &self,
        from: Address,
        to: Address,
        data: Bytes,
    ) -> Result<u128, ChainError> {
        let result = self
            .rpc_call(
                "eth_estimateGas",
                json!([{ "from": from, "to": to, "data": data }]),
            )
            .await?;
        decode_quantity(&result)
    }

    /// `eth_chainId`.
    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        let result = self.rpc_call("eth_chainId", json!([])).await?;
        decode_quantity(&result).map(|q| q as u64)
    }

    /// Resolver discovery: query the registry for the name's node, walking
    /// up parent names until a non-zero resolver answers.
    pub async fn get_resolver(&self, name: &EnsName) -> Result<Option<Address>, ChainError> {
        let mut current = Some(name.clone());
        while let Some(n) = current {
            let call = EnsRegistry::resolverCall { node: n.namehash() };
            let ret = self
                .eth_call(self.config.registry, call.abi_encode().into())
                .await?;
            let resolver = EnsRegistry::resolverCall::abi_decode_returns(&ret, true)
                .map_err(|e| ChainError::InvalidResponse(e.to_string()))?
                ._0;
            if resolver != Address::ZERO {
                debug!(name = %n, %resolver, "resolver found");
                return Ok(Some(resolver));
            }
            current = n.parent();
        }
        Ok(None)
    }

    /// Whether the name is held by the NameWrapper.
    pub async fn is_wrapped(&self, name: &EnsName) -> Result<bool, ChainError> {
        let call = NameWrapper::isWrappedCall {
            node: name.namehash(),
        };
        let ret = self
            .eth_call(self.config.name_wrapper, call.abi_encode().into())
            .await?;
        let decoded = NameWrapper::isWrappedCall::abi_decode_returns(&ret, true)
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
        Ok(decoded._0)
    }

    /// ERC-165 probe. A revert or undecodable return reads as "not
    /// supported" — resolvers predating ERC-165 must not abort the caller.
    pub async fn supports_interface(
        &self,
        target: Address,
        interface_id: [u8; 4],
    ) -> Result<bool, ChainError> {
        let call = Erc165::supportsInterfaceCall {
            interfaceID: interface_id.into(),
        };
        let ret = match self.eth_call(target, call.abi_encode().into()).await {
            Ok(ret) => ret,
            Err(ChainError::Rpc { .. }) => return Ok(false),
            Err(other) => return Err(other),
        };
        Ok(Erc165::supportsInterfaceCall::abi_decode_returns(&ret, true)
            .map(|r| r._0)
            .unwrap_or(false))
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

fn decode_bytes(value: &serde_json::Value) -> Result<Bytes, ChainError> {
    let s = value
        .as_str()
        .ok_or_else(|| ChainError::InvalidResponse("expected hex string".into()))?;
    s.parse::<Bytes>()
        .map_err(|e| ChainError::InvalidResponse(e.to_string()))
}

fn decode_quantity(value: &serde_json::Value) -> Result<u128, ChainError> {
    let s = value
        .as_str()
        .ok_or_else(|| ChainError::InvalidResponse("expected hex quantity".into()))?;
    let digits = s.strip_prefix("0x").unwrap_or(s);
    u128::from_str_radix(digits, 16).map_err(|e| ChainError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_decoding() {
        assert_eq!(decode_quantity(&json!("0x5208")).unwrap(), 21000);
        assert_eq!(decode_quantity(&json!("0x0")).unwrap(), 0);
        assert!(decode_quantity(&json!("not-hex")).is_err());
        assert!(decode_quantity(&json!(42)).is_err());
    }

    #[test]
    fn bytes_decoding() {
        let decoded = decode_bytes(&json!("0x01ff")).unwrap();
        assert_eq!(decoded.as_ref(), &[0x01, 0xff]);
        assert!(decode_bytes(&json!(null)).is_err());
    }

    #[test]
    fn client_creation() {
        let client = RpcClient::new(ChainConfig::mainnet()).unwrap();
        assert_eq!(client.config().chain_id, nameflow_types::ChainId::MAINNET);
    }
}
