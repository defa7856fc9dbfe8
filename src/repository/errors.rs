use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// A foreign key points at a row that does not exist.
    #[error("missing reference: {0}")]
    MissingReference(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(DieselError),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

/// Convenience alias used by repository traits.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::ConstraintViolation(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::MissingReference(info.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}
