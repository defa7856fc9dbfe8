use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors returned by service functions and mapped to HTTP statuses by routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed entity does not exist.
    #[error("not found")]
    NotFound,
    /// The request payload failed validation.
    #[error("{0}")]
    Form(String),
    /// The write collides with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Unexpected failure in a lower layer.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::MissingReference(message) => ServiceError::Form(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
