use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type returned by the request handlers.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures a request handler can report. Each variant carries the message
/// returned to the client as `detail`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A record with the same unique name already exists.
    #[error("{0}")]
    Conflict(String),
    /// The request was well-formed but violates a business rule.
    #[error("{0}")]
    InvalidInput(String),
    /// The requested record or search result does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Anything else, including store failures.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found.".to_string()),
            RepositoryError::UniqueViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
