//! Send-name transaction assembly.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use nameflow_types::{EnsName, RecordSet};

use crate::item::TransactionItem;

/// Form state for the send-name flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendNameRequest {
    pub name: EnsName,
    /// Where the name goes. Without a recipient there is nothing to do.
    pub recipient: Option<Address>,
    #[serde(default)]
    pub set_eth_record: bool,
    #[serde(default)]
    pub reset_profile: bool,
    #[serde(default)]
    pub send_manager: bool,
    #[serde(default)]
    pub send_owner: bool,
    /// Resolver to write the reset profile through, when known.
    #[serde(default)]
    pub resolver_address: Option<Address>,
}

/// Assemble the ordered transaction list for a send-name request.
///
/// Resetting the profile re-points the ETH record as part of the reset, so
/// a standalone ETH record update is only emitted when no reset happens.
/// The reset itself needs a resolver to write through; without one the
/// reset flag is ignored.
pub fn send_name_transactions(request: &SendNameRequest) -> Vec<TransactionItem> {
    let Some(recipient) = request.recipient else {
        return Vec::new();
    };

    let set_eth_record_only = request.set_eth_record && !request.reset_profile;

    let items = [
        set_eth_record_only.then(|| TransactionItem::UpdateEthAddress {
            name: request.name.clone(),
            address: recipient,
        }),
        request
            .reset_profile
            .then_some(request.resolver_address)
            .flatten()
            .map(|resolver_address| TransactionItem::ResetProfileWithRecords {
                name: request.name.clone(),
                records: RecordSet::reset_with_eth(recipient),
                resolver_address,
            }),
        request.send_manager.then(|| TransactionItem::SendManager {
            name: request.name.clone(),
            new_owner: recipient,
        }),
        request.send_owner.then(|| TransactionItem::SendOwner {
            name: request.name.clone(),
            new_owner: recipient,
        }),
    ];

    items.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use nameflow_types::{AddressRecord, CoinType};

    fn request() -> SendNameRequest {
        SendNameRequest {
            name: EnsName::parse("nick.eth").unwrap(),
            recipient: Some(address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045")),
            set_eth_record: false,
            reset_profile: false,
            send_manager: false,
            send_owner: false,
            resolver_address: Some(address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63")),
        }
    }

    #[test]
    fn no_recipient_means_no_transactions() {
        let req = SendNameRequest {
            recipient: None,
            set_eth_record: true,
            reset_profile: true,
            send_manager: true,
            send_owner: true,
            ..request()
        };
        assert!(send_name_transactions(&req).is_empty());
    }

    #[test]
    fn eth_record_only() {
        let req = SendNameRequest {
            set_eth_record: true,
            ..request()
        };
        let items = send_name_transactions(&req);
        assert_eq!(items.len(), 1);
        match &items[0] {
            TransactionItem::UpdateEthAddress { name, address } => {
                assert_eq!(name.as_str(), "nick.eth");
                assert_eq!(*address, req.recipient.unwrap());
            }
            other => panic!("unexpected item: {other:?}"),
        }
    }

    #[test]
    fn reset_profile_subsumes_the_eth_record_update() {
        let req = SendNameRequest {
            set_eth_record: true,
            reset_profile: true,
            ..request()
        };
        let items = send_name_transactions(&req);
        assert_eq!(items.len(), 1);
        match &items[0] {
            TransactionItem::ResetProfileWithRecords {
                records,
                resolver_address,
                ..
            } => {
                assert!(records.clear_records);
                assert_eq!(
                    records.coins,
                    vec![AddressRecord::eth(req.recipient.unwrap())]
                );
                assert_eq!(records.coins[0].coin, CoinType::ETH);
                assert_eq!(*resolver_address, req.resolver_address.unwrap());
            }
            other => panic!("unexpected item: {other:?}"),
        }
    }

    #[test]
    fn reset_profile_without_a_resolver_is_dropped() {
        let req = SendNameRequest {
            reset_profile: true,
            resolver_address: None,
            ..request()
        };
        assert!(send_name_transactions(&req).is_empty());

        // The flag being ignored does not resurrect the plain record update.
        let req = SendNameRequest {
            set_eth_record: true,
            reset_profile: true,
            resolver_address: None,
            ..request()
        };
        assert!(send_name_transactions(&req).is_empty());
    }

    #[test]
    fn full_request_keeps_the_fixed_order() {
        let req = SendNameRequest {
            set_eth_record: true,
            send_manager: true,
            send_owner: true,
            ..request()
        };
        let kinds: Vec<_> = send_name_transactions(&req)
            .iter()
            .map(TransactionItem::kind)
            .collect();
        assert_eq!(kinds, ["updateEthAddress", "sendManager", "sendOwner"]);

        let req = SendNameRequest {
            reset_profile: true,
            send_manager: true,
            send_owner: true,
            ..request()
        };
        let kinds: Vec<_> = send_name_transactions(&req)
            .iter()
            .map(TransactionItem::kind)
            .collect();
        assert_eq!(
            kinds,
            ["resetProfileWithRecords", "sendManager", "sendOwner"]
        );
    }
}
