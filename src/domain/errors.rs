// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// The backing store could not be reached. Safe to retry.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

