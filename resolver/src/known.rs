//! Allow-list of known resolver deployments.
//!
//! A resolver on this list has audited write semantics: interface support is
//! answered locally and the gas-estimation probe is skipped. The
//! `name_wrapper_aware` flag records whether the deployment checks wrapped
//! ownership through the NameWrapper, which decides authorization for
//! wrapped names.

use alloy_primitives::{address, Address};

use nameflow_types::ChainId;

use crate::interfaces::ResolverInterface;

/// One allow-listed resolver deployment.
#[derive(Clone, Copy, Debug)]
pub struct KnownResolver {
    pub chain_id: ChainId,
    pub address: Address,
    /// The deployment authorises wrapped names through the NameWrapper.
    pub name_wrapper_aware: bool,
    pub interfaces: &'static [ResolverInterface],
}

impl KnownResolver {
    pub fn supports(&self, interface: ResolverInterface) -> bool {
        self.interfaces.contains(&interface)
    }
}

const FULL_PROFILE: &[ResolverInterface] = &[
    ResolverInterface::Addr,
    ResolverInterface::MultiCoinAddr,
    ResolverInterface::Text,
    ResolverInterface::ContentHash,
];

const LEGACY_MULTICOIN_PROFILE: &[ResolverInterface] = &[
    ResolverInterface::Addr,
    ResolverInterface::MultiCoinAddr,
    ResolverInterface::Text,
];

const LEGACY_PROFILE: &[ResolverInterface] =
    &[ResolverInterface::Addr, ResolverInterface::Text];

pub const KNOWN_RESOLVERS: &[KnownResolver] = &[
    // Mainnet public resolver (NameWrapper era).
    KnownResolver {
        chain_id: ChainId::MAINNET,
        address: address!("231b0Ee14048e9dCcD1d247744d114a4EB5E8E63"),
        name_wrapper_aware: true,
        interfaces: FULL_PROFILE,
    },
    // Mainnet public resolver 2.
    KnownResolver {
        chain_id: ChainId::MAINNET,
        address: address!("4976fb03C32e5B8cfe2b6cCB31c09Ba78EBaBa41"),
        name_wrapper_aware: true,
        interfaces: FULL_PROFILE,
    },
    // Pre-wrapper public resolver.
    KnownResolver {
        chain_id: ChainId::MAINNET,
        address: address!("DaaF96c344f63131acadD0Ea35170E7892d3dfBA"),
        name_wrapper_aware: false,
        interfaces: LEGACY_MULTICOIN_PROFILE,
    },
    // Original public resolver, single-coin only.
    KnownResolver {
        chain_id: ChainId::MAINNET,
        address: address!("1da022710dF5002339274AaDEe8D58218e9D6AB5"),
        name_wrapper_aware: false,
        interfaces: LEGACY_PROFILE,
    },
    // Sepolia public resolver.
    KnownResolver {
        chain_id: ChainId::SEPOLIA,
        address: address!("8FADE66B79cC9f707aB26799354482EB93a5B7dD"),
        name_wrapper_aware: true,
        interfaces: FULL_PROFILE,
    },
];

/// Look up a resolver on the allow-list.
pub fn known_resolver(chain_id: ChainId, address: Address) -> Option<&'static KnownResolver> {
    KNOWN_RESOLVERS
        .iter()
        .find(|r| r.chain_id == chain_id && r.address == address)
}
