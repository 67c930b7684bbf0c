//! DoH client and response interpretation.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use nameflow_query::{QueryCache, QueryKey, QueryPolicy};
use nameflow_types::EnsName;

use crate::error::DnsError;

/// Cloudflare's DNS-over-HTTPS endpoint.
pub const DNS_OVER_HTTP_ENDPOINT: &str = "https://1.1.1.1/dns-query";

/// DNS response code for NXDOMAIN.
const STATUS_NXDOMAIN: u32 = 3;

/// JSON answer from the DoH endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct DohResponse {
    /// DNS response code.
    #[serde(rename = "Status")]
    pub status: u32,
    /// Authenticated Data: the response validated under DNSSEC.
    #[serde(rename = "AD", default)]
    pub ad: bool,
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DnsRecord>,
    #[serde(rename = "Question", default)]
    pub question: Vec<DnsQuestion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u32,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub data: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DnsQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u32,
}

/// NXDOMAIN means the zone cannot be DNSSEC-enabled; otherwise the `AD`
/// bit is the answer.
pub fn interpret(response: &DohResponse) -> bool {
    if response.status == STATUS_NXDOMAIN {
        return false;
    }
    response.ad
}

/// HTTP client for the DNSSEC check.
#[derive(Clone)]
pub struct DnsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DnsClient {
    pub fn new() -> Result<Self, DnsError> {
        Self::with_endpoint(DNS_OVER_HTTP_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, DnsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| DnsError::Client(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// One uncached DNSSEC probe for `name`.
    pub async fn dnssec_enabled(&self, name: &EnsName) -> Result<bool, DnsError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("name", name.as_str()), ("do", "true")])
            .header("accept", "application/dns-json")
            .send()
            .await
            .map_err(|e| DnsError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DnsError::Status(response.status().as_u16()));
        }

        let doh: DohResponse = response
            .json()
            .await
            .map_err(|e| DnsError::InvalidResponse(e.to_string()))?;

        debug!(name = %name, status = doh.status, ad = doh.ad, "dnssec probe");
        Ok(interpret(&doh))
    }
}

/// Cached DNSSEC check with the gate the manager applies: `.eth` names and
/// the `[root]` pseudo-name never hit DNS.
///
/// Returns `Ok(None)` when the check does not apply to `name`.
pub async fn dnssec_enabled_cached(
    cache: &QueryCache,
    client: &DnsClient,
    name: &EnsName,
) -> Result<Option<bool>, DnsError> {
    if name.as_str() == "eth" || name.is_root_notation() {
        return Ok(None);
    }

    let key = QueryKey::new("dnssec_enabled", name, None)?;
    let result = cache
        .fetch_with(key, QueryPolicy::default().with_retry(2), || {
            client.dnssec_enabled(name)
        })
        .await?;
    Ok(Some(result.data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DohResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn nxdomain_is_never_enabled() {
        let response = parse(r#"{"Status": 3, "AD": true}"#);
        assert!(!interpret(&response));
    }

    #[test]
    fn ad_bit_is_the_answer_otherwise() {
        assert!(interpret(&parse(r#"{"Status": 0, "AD": true}"#)));
        assert!(!interpret(&parse(r#"{"Status": 0, "AD": false}"#)));
        // Absent AD reads as unvalidated.
        assert!(!interpret(&parse(r#"{"Status": 0}"#)));
    }

    #[test]
    fn full_response_shape_parses() {
        let response = parse(
            r#"{
                "Status": 0,
                "TC": false,
                "RD": true,
                "RA": true,
                "AD": true,
                "CD": false,
                "Question": [{"name": "example.com.", "type": 1}],
                "Answer": [
                    {"name": "example.com.", "type": 1, "TTL": 86400, "data": "93.184.215.14"}
                ]
            }"#,
        );
        assert!(interpret(&response));
        assert_eq!(response.answer.len(), 1);
        assert_eq!(response.question[0].record_type, 1);
    }

    // The gate returns before any HTTP request, so an unroutable endpoint
    // proves the fetcher never ran.
    #[tokio::test]
    async fn eth_and_root_are_never_queried() {
        let cache = QueryCache::new();
        let client = DnsClient::with_endpoint("http://127.0.0.1:1").unwrap();

        let eth = EnsName::parse("eth").unwrap();
        assert!(matches!(
            dnssec_enabled_cached(&cache, &client, &eth).await,
            Ok(None)
        ));

        let root = EnsName::parse("[root]").unwrap();
        assert!(matches!(
            dnssec_enabled_cached(&cache, &client, &root).await,
            Ok(None)
        ));
        assert!(cache.is_empty().await);
    }
}
