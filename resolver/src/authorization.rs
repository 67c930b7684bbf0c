//! Resolver write-authorization.
//!
//! The decision itself is a pure table over four facts; the async entry
//! point gathers those facts with the same dependency gating the manager UI
//! applies, then caches the outcome.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};
use tracing::debug;

use nameflow_chain::abi::PublicResolver;
use nameflow_chain::RpcClient;
use nameflow_query::{QueryCache, QueryKey, QueryPolicy};
use nameflow_types::{CoinType, EnsName};

use crate::error::ResolverError;
use crate::interfaces::ResolverInterface;
use crate::known::{known_resolver, KnownResolver};

/// Outcome of the authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverAuthorization {
    /// The resolver can hold the records the manager writes.
    pub is_valid: bool,
    /// The connected account's writes through this resolver will land.
    pub is_authorised: bool,
}

impl ResolverAuthorization {
    pub const INVALID: Self = Self {
        is_valid: false,
        is_authorised: false,
    };
}

/// Inputs to the decision table.
#[derive(Clone, Copy, Debug)]
pub struct AuthorizationInputs<'a> {
    /// The resolver answers multi-coin address lookups.
    pub supports_multicoin: bool,
    /// Allow-list entry for the resolver, when there is one.
    pub known: Option<&'a KnownResolver>,
    /// The name is held by the NameWrapper.
    pub is_wrapped: bool,
    /// Gas estimate from the probe write, when the probe ran and succeeded.
    pub probe_gas: Option<u128>,
}

/// The decision table (short-circuit, in order).
///
/// Without multi-coin support the resolver cannot hold the profile at all.
/// An allow-listed resolver is trusted by construction; for a wrapped name
/// it must also be wrapper-aware. Anything else is judged by whether the
/// probe write would go through.
pub fn decide(inputs: AuthorizationInputs<'_>) -> ResolverAuthorization {
    if !inputs.supports_multicoin {
        return ResolverAuthorization::INVALID;
    }
    if let Some(known) = inputs.known {
        return ResolverAuthorization {
            is_valid: true,
            is_authorised: if inputs.is_wrapped {
                known.name_wrapper_aware
            } else {
                true
            },
        };
    }
    ResolverAuthorization {
        is_valid: true,
        is_authorised: matches!(inputs.probe_gas, Some(gas) if gas > 0),
    }
}

/// Calldata for the harmless probe write: set the name's ETH address record
/// to the empty address.
pub fn probe_calldata(name: &EnsName) -> Bytes {
    PublicResolver::setAddrCall {
        node: name.namehash(),
        coinType: U256::from(CoinType::ETH.as_u64()),
        a: Bytes::copy_from_slice(Address::ZERO.as_slice()),
    }
    .abi_encode()
    .into()
}

/// Full authorization check for `name` with `account` connected.
///
/// The result is cached per (name, account, chain).
pub async fn check_authorization(
    client: &RpcClient,
    cache: &QueryCache,
    name: &EnsName,
    account: Option<Address>,
) -> Result<ResolverAuthorization, ResolverError> {
    let key = QueryKey::new(
        "resolver_authorization",
        &serde_json::json!({ "name": name, "account": account }),
        Some(client.config().chain_id),
    )?;
    let result = cache
        .fetch_with(key, QueryPolicy::default(), || {
            compute_authorization(client, name, account)
        })
        .await?;
    Ok(result.data)
}

/// One uncached pass over the dependency chain.
///
/// Fetches are gated like the manager's queries: interface support only
/// runs once a resolver is found (and is answered locally for allow-listed
/// deployments); the gas probe only runs for unknown resolvers that support
/// multi-coin addresses.
async fn compute_authorization(
    client: &RpcClient,
    name: &EnsName,
    account: Option<Address>,
) -> Result<ResolverAuthorization, ResolverError> {
    let Some(resolver) = client.get_resolver(name).await? else {
        debug!(%name, "no resolver on chain, nothing can be written");
        return Ok(ResolverAuthorization::INVALID);
    };

    let is_wrapped = client.is_wrapped(name).await?;
    let known = known_resolver(client.config().chain_id, resolver);

    let supports_multicoin = match known {
        Some(k) => k.supports(ResolverInterface::MultiCoinAddr),
        None => {
            client
                .supports_interface(resolver, ResolverInterface::MultiCoinAddr.id())
                .await?
        }
    };

    let probe_gas = if known.is_none() && supports_multicoin {
        match account {
            // A failed estimate is an answer (the write would revert), not
            // an error.
            Some(from) => client
                .estimate_gas(from, resolver, probe_calldata(name))
                .await
                .ok(),
            None => None,
        }
    } else {
        None
    };

    let authorization = decide(AuthorizationInputs {
        supports_multicoin,
        known,
        is_wrapped,
        probe_gas,
    });
    debug!(
        %name,
        %resolver,
        is_wrapped,
        known = known.is_some(),
        ?authorization,
        "resolver authorization decided"
    );
    Ok(authorization)
}
