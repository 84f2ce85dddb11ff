use thiserror::Error;

use crate::forms::ValidationDetails;
use crate::repository::RepositoryError;

pub mod auth;
pub mod blog;
pub mod main;
pub mod products;
pub mod seo;
pub mod submissions;

/// Errors produced by the service layer, translated to transport responses
/// by the route adapters.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Credentials were wrong or no session was presented. The public message
    /// is intentionally uninformative.
    #[error("unauthorized")]
    Unauthorized,
    /// A referenced entity does not exist.
    #[error("not found")]
    NotFound,
    /// Schema validation failed; carries the field/message map.
    #[error("validation failed")]
    Validation(ValidationDetails),
    /// A malformed request that is not a schema violation (for example blank
    /// login credentials).
    #[error("{0}")]
    Form(String),
    /// Data store failure; surfaced to clients as a generic server error.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
    /// Anything else that should become a 500.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

impl From<bcrypt::BcryptError> for ServiceError {
    fn from(value: bcrypt::BcryptError) -> Self {
        Self::Internal(value.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
