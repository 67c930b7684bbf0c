use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("key encoding error: {0}")]
    Key(String),

    #[error("value encoding error: {0}")]
    Value(String),

    #[error("fetch failed after {attempts} attempt(s): {message}")]
    Fetch { attempts: u32, message: String },
}
