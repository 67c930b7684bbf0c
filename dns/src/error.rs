use thiserror::Error;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("DoH endpoint returned HTTP {0}")]
    Status(u16),

    #[error("invalid JSON response: {0}")]
    InvalidResponse(String),

    #[error("query error: {0}")]
    Query(#[from] nameflow_query::QueryError),
}
