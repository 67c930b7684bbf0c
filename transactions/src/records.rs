//! Record-update call assembly.
//!
//! One resolver update is a `multicall` over the per-record setter calls,
//! mirroring how the manager batches profile edits into a single
//! transaction.

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolCall;

use nameflow_chain::abi::PublicResolver;
use nameflow_chain::RpcClient;
use nameflow_types::{EnsName, RecordSet};

use crate::error::TxError;

/// A prepared resolver write, ready for signing by the external wallet.
#[derive(Clone, Debug)]
pub struct RecordUpdate {
    pub resolver: Address,
    pub from: Address,
    pub calldata: Bytes,
}

/// Per-record setter calls, in write order: clear first, then coins, texts,
/// and the content hash.
pub fn record_update_calls(node: B256, records: &RecordSet) -> Vec<Bytes> {
    let mut calls = Vec::new();
    if records.clear_records {
        calls.push(PublicResolver::clearRecordsCall { node }.abi_encode().into());
    }
    for coin in &records.coins {
        calls.push(
            PublicResolver::setAddrCall {
                node,
                coinType: U256::from(coin.coin.as_u64()),
                a: coin.value.clone(),
            }
            .abi_encode()
            .into(),
        );
    }
    for text in &records.texts {
        calls.push(
            PublicResolver::setTextCall {
                node,
                key: text.key.clone(),
                value: text.value.clone(),
            }
            .abi_encode()
            .into(),
        );
    }
    if let Some(hash) = &records.content_hash {
        calls.push(
            PublicResolver::setContenthashCall {
                node,
                hash: hash.clone(),
            }
            .abi_encode()
            .into(),
        );
    }
    calls
}

/// Wrap the call array in a single `multicall(bytes[])`.
pub fn encode_multicall(calls: Vec<Bytes>) -> Bytes {
    PublicResolver::multicallCall { data: calls }.abi_encode().into()
}

/// Prepare a record update for `name`.
///
/// Surfaces, in order: a name that is not at least second-level, an empty
/// record set, a name with no resolver on chain, and a missing signer.
/// Callers display these; nothing is recovered here.
pub async fn prepare_record_update(
    client: &RpcClient,
    name: &EnsName,
    records: &RecordSet,
    signer: Option<Address>,
) -> Result<RecordUpdate, TxError> {
    if name.parent().is_none() {
        return Err(TxError::NotAnEnsName {
            name: name.to_string(),
        });
    }
    if records.is_empty() {
        return Err(TxError::EmptyRecordSet);
    }

    let resolver = client
        .get_resolver(name)
        .await?
        .ok_or_else(|| TxError::NoResolver {
            name: name.to_string(),
        })?;
    let from = signer.ok_or(TxError::NoSigner)?;

    let calls = record_update_calls(name.namehash(), records);
    Ok(RecordUpdate {
        resolver,
        from,
        calldata: encode_multicall(calls),
    })
}
