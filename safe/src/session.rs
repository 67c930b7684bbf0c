//! Safe-app session detection.
//!
//! The manager behaves differently when it runs inside a Safe: either
//! embedded as an iframe (the Safe connector) or driven over WalletConnect
//! from the Safe web app. The WalletConnect case is recognised by the
//! session's peer metadata.

use serde::{Deserialize, Serialize};

/// How the Safe hosts the app, when it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeAppType {
    Iframe,
    WalletConnect,
}

/// Connector kinds the detection distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKind {
    Safe,
    WalletConnect,
    Injected,
    Other,
}

/// Peer metadata of a WalletConnect session.
///
/// Every field is optional: session shapes vary across wallet protocol
/// versions, and an unknown shape must read as "not a Safe app".
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PeerMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionPeer {
    #[serde(default)]
    pub metadata: Option<PeerMetadata>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WcSession {
    #[serde(default)]
    pub peer: Option<SessionPeer>,
}

impl WcSession {
    /// Parse a raw session payload; anything unrecognised collapses to an
    /// empty session (and therefore to "not a Safe app").
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// A connected wallet, as far as detection is concerned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConnectorSession {
    pub kind: ConnectorKind,
    /// The WalletConnect session, when the connector has one.
    #[serde(default)]
    pub session: Option<WcSession>,
}

/// The Safe web app's WalletConnect peer URL.
const SAFE_APP_URL: &str = "https://app.safe.global/";

/// Detect whether the connector is driven from inside a Safe.
///
/// Unknown or partial session shapes are `None`, never a guess.
pub fn safe_app_type(connector: &ConnectorSession) -> Option<SafeAppType> {
    match connector.kind {
        ConnectorKind::Safe => Some(SafeAppType::Iframe),
        ConnectorKind::WalletConnect => {
            let metadata = connector.session.as_ref()?.peer.as_ref()?.metadata.as_ref()?;
            let name = metadata.name.as_deref()?;
            let url = metadata.url.as_deref()?;
            (name.starts_with("Safe") && url == SAFE_APP_URL)
                .then_some(SafeAppType::WalletConnect)
        }
        ConnectorKind::Injected | ConnectorKind::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wc_session(name: &str, url: &str) -> ConnectorSession {
        ConnectorSession {
            kind: ConnectorKind::WalletConnect,
            session: Some(WcSession {
                peer: Some(SessionPeer {
                    metadata: Some(PeerMetadata {
                        name: Some(name.to_string()),
                        url: Some(url.to_string()),
                    }),
                }),
            }),
        }
    }

    #[test]
    fn safe_connector_is_an_iframe_app() {
        let connector = ConnectorSession {
            kind: ConnectorKind::Safe,
            session: None,
        };
        assert_eq!(safe_app_type(&connector), Some(SafeAppType::Iframe));
    }

    #[test]
    fn safe_web_app_over_walletconnect() {
        let connector = wc_session("Safe{Wallet}", "https://app.safe.global/");
        assert_eq!(safe_app_type(&connector), Some(SafeAppType::WalletConnect));
    }

    #[test]
    fn peer_must_match_both_name_and_url() {
        assert_eq!(
            safe_app_type(&wc_session("Safe{Wallet}", "https://evil.example/")),
            None
        );
        assert_eq!(
            safe_app_type(&wc_session("NotASafe", "https://app.safe.global/")),
            None
        );
    }

    #[test]
    fn missing_session_pieces_are_not_a_safe_app() {
        let no_session = ConnectorSession {
            kind: ConnectorKind::WalletConnect,
            session: None,
        };
        assert_eq!(safe_app_type(&no_session), None);

        let empty_session = ConnectorSession {
            kind: ConnectorKind::WalletConnect,
            session: Some(WcSession::default()),
        };
        assert_eq!(safe_app_type(&empty_session), None);

        let no_url = ConnectorSession {
            kind: ConnectorKind::WalletConnect,
            session: Some(WcSession {
                peer: Some(SessionPeer {
                    metadata: Some(PeerMetadata {
                        name: Some("Safe{Wallet}".to_string()),
                        url: None,
                    }),
                }),
            }),
        };
        assert_eq!(safe_app_type(&no_url), None);
    }

    #[test]
    fn other_connectors_are_never_safe_apps() {
        let injected = ConnectorSession {
            kind: ConnectorKind::Injected,
            session: Some(WcSession::default()),
        };
        assert_eq!(safe_app_type(&injected), None);
    }

    #[test]
    fn unknown_session_shapes_collapse_to_empty() {
        // A future protocol version with a different layout.
        let session = WcSession::from_value(json!({
            "peers": [{ "meta": { "title": "Safe" } }],
            "version": 9
        }));
        assert!(session.peer.is_none());

        // A shape where a known field has the wrong type.
        let session = WcSession::from_value(json!({ "peer": { "metadata": 5 } }));
        assert!(session.peer.is_none());

        let connector = ConnectorSession {
            kind: ConnectorKind::WalletConnect,
            session: Some(session),
        };
        assert_eq!(safe_app_type(&connector), None);
    }
}
