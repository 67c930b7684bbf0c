//! Safe transaction-service client.

use std::time::Duration;

use alloy_primitives::B256;
use serde::Deserialize;
use tracing::warn;

use nameflow_types::ChainId;

use crate::error::SafeError;

/// The Safe client-gateway endpoint.
pub const SAFE_ENDPOINT: &str = "https://safe-client.safe.global";

/// Response union: the service answers with either an error object carrying
/// a JSON-encoded message or a transaction object. The error shape is tried
/// first; a transaction never carries `code` + `message`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SafeResponse {
    Error(SafeErrorBody),
    Tx(SafeTx),
}

#[derive(Debug, Deserialize)]
struct SafeErrorBody {
    code: i64,
    message: String,
}

/// The slice of the transaction object the lookup needs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTx {
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub tx_status: Option<String>,
    #[serde(default)]
    pub executed_at: Option<u64>,
    /// On-chain execution hash; absent until the Safe executes.
    #[serde(default)]
    pub tx_hash: Option<B256>,
}

/// HTTP client for the Safe transaction service.
#[derive(Clone)]
pub struct SafeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SafeClient {
    pub fn new() -> Result<Self, SafeError> {
        Self::with_endpoint(SAFE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SafeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SafeError::Client(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Resolve a Safe transaction hash to the on-chain transaction hash.
    ///
    /// The service reports unknown hashes as an error object; that, a
    /// non-2xx status, an unparseable body, and a transaction that has not
    /// executed yet all read as `None`.
    pub async fn tx_from_safe_tx_hash(
        &self,
        chain_id: ChainId,
        safe_tx_hash: B256,
    ) -> Result<Option<B256>, SafeError> {
        let url = format!(
            "{}/v1/chains/{}/transactions/{}",
            self.endpoint,
            chain_id.as_u64(),
            safe_tx_hash
        );

        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| SafeError::Http(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), %safe_tx_hash, "safe lookup failed");
            return Ok(None);
        }

        let body: SafeResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%safe_tx_hash, "unparseable safe response: {e}");
                return Ok(None);
            }
        };

        match body {
            SafeResponse::Error(err) => {
                warn!(code = err.code, message = %err.message, "safe transaction service error");
                Ok(None)
            }
            SafeResponse::Tx(tx) => Ok(tx.tx_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SafeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn error_objects_win_over_the_transaction_shape() {
        let body = parse(r#"{"code": 1337, "message": "{\"safeTxHash\":\"not found\"}"}"#);
        assert!(matches!(body, SafeResponse::Error(e) if e.code == 1337));
    }

    #[test]
    fn executed_transaction_carries_the_hash() {
        let body = parse(
            r#"{
                "safeAddress": "0x4f8a8a71bCE0774E64becc7ea4cF496EC09c1dF9",
                "txId": "multisig_0x4f8a_0xabc",
                "txStatus": "SUCCESS",
                "executedAt": 1712345678,
                "txHash": "0x0102030405060708091011121314151617181920212223242526272829303132"
            }"#,
        );
        match body {
            SafeResponse::Tx(tx) => {
                assert_eq!(tx.tx_status.as_deref(), Some("SUCCESS"));
                let hash = tx.tx_hash.unwrap();
                assert_eq!(hash[0], 0x01);
                assert_eq!(hash[31], 0x32);
            }
            SafeResponse::Error(_) => panic!("parsed as error"),
        }
    }

    #[test]
    fn pending_transaction_has_no_hash() {
        let body = parse(r#"{"txId": "multisig_0x4f8a_0xabc", "txStatus": "AWAITING_EXECUTION", "txHash": null}"#);
        match body {
            SafeResponse::Tx(tx) => assert!(tx.tx_hash.is_none()),
            SafeResponse::Error(_) => panic!("parsed as error"),
        }
    }
}
