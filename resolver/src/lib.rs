//! Resolver capability and authorization checks.
//!
//! Before the manager writes records it must know two things about a name's
//! resolver: whether it can hold the records at all (`is_valid`) and whether
//! the connected account's writes through it will land (`is_authorised`).
//! This crate answers both, short-circuiting through an allow-list of known
//! resolver deployments and falling back to a harmless gas-estimation probe.

pub mod authorization;
pub mod error;
pub mod interfaces;
pub mod known;

pub use authorization::{
    check_authorization, decide, probe_calldata, AuthorizationInputs, ResolverAuthorization,
};
pub use error::ResolverError;
pub use interfaces::ResolverInterface;
pub use known::{known_resolver, KnownResolver};
