//! Transaction descriptors handed to the transaction-flow executor.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use nameflow_types::{EnsName, RecordSet};

/// A single user-requested action, tagged by kind.
///
/// Descriptors are immutable once created; ownership passes to the executor
/// that submits them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TransactionItem {
    /// Point the name's ETH address record at a new address.
    #[serde(rename_all = "camelCase")]
    UpdateEthAddress { name: EnsName, address: Address },

    /// Wipe the profile and write the given records in one multicall.
    #[serde(rename_all = "camelCase")]
    ResetProfileWithRecords {
        name: EnsName,
        records: RecordSet,
        resolver_address: Address,
    },

    /// Hand the manager role to a new address.
    #[serde(rename_all = "camelCase")]
    SendManager { name: EnsName, new_owner: Address },

    /// Hand ownership to a new address.
    #[serde(rename_all = "camelCase")]
    SendOwner { name: EnsName, new_owner: Address },
}

impl TransactionItem {
    /// Stable kind tag, as the executor sees it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpdateEthAddress { .. } => "updateEthAddress",
            Self::ResetProfileWithRecords { .. } => "resetProfileWithRecords",
            Self::SendManager { .. } => "sendManager",
            Self::SendOwner { .. } => "sendOwner",
        }
    }

    /// The name the action targets.
    pub fn name(&self) -> &EnsName {
        match self {
            Self::UpdateEthAddress { name, .. } => name,
            Self::ResetProfileWithRecords { name, .. } => name,
            Self::SendManager { name, .. } => name,
            Self::SendOwner { name, .. } => name,
        }
    }
}
