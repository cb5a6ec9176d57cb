use thiserror::Error;

/// Error type returned by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Input failed shape or range validation.
    #[error("{0}")]
    Form(String),
    /// Input could not be converted into a domain value.
    #[error("{0}")]
    TypeConstraint(String),
    /// A foreign id in the input points at nothing.
    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: i32 },
    /// A unique slug is already taken.
    #[error("{entity} with slug '{slug}' already exists")]
    DuplicateSlug { entity: &'static str, slug: String },
    /// The targeted row does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
