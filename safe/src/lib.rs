//! Safe integration.
//!
//! Two concerns: resolving a Safe transaction hash to the on-chain
//! transaction that executed it, and detecting whether the app is being
//! driven from inside a Safe (iframe or WalletConnect).

pub mod client;
pub mod error;
pub mod session;

pub use client::{SafeClient, SafeTx, SAFE_ENDPOINT};
pub use error::SafeError;
pub use session::{
    safe_app_type, ConnectorKind, ConnectorSession, PeerMetadata, SafeAppType,
    SessionPeer, WcSession,
};
