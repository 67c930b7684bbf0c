use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("chain error: {0}")]
    Chain(#[from] nameflow_chain::ChainError),

    #[error("query error: {0}")]
    Query(#[from] nameflow_query::QueryError),
}
