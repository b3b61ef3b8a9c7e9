use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not obtain a pooled connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// Underlying database operation failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored value failed domain validation on the way out.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
