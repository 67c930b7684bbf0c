//! DNSSEC probe over DNS-over-HTTPS.
//!
//! Importing a DNS name into ENS requires the zone to be DNSSEC-signed;
//! this crate asks a DoH endpoint and reads the validation (`AD`) bit.

pub mod client;
pub mod error;

pub use client::{
    dnssec_enabled_cached, interpret, DnsClient, DnsQuestion, DnsRecord, DohResponse,
    DNS_OVER_HTTP_ENDPOINT,
};
pub use error::DnsError;
