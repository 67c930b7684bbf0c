use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafeError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Http(String),
}
