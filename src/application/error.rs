// src/application/error.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The requested transition is not allowed from the current status.
    /// Callers should not retry.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A collaborator could not be reached. Retrying the whole operation is safe.
    #[error("external service unavailable: {0}")]
    ExternalUnavailable(String),

    #[error("operation cancelled: {0}")]
    Cancelled(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn external_unavailable(msg: impl Into<String>) -> Self {
        Self::ExternalUnavailable(msg.into())
    }

    pub fn cancelled(msg: impl Into<String>) -> Self {
        Self::Cancelled(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn article_not_found(id: ArticleId) -> Self {
        Self::NotFound(format!("article with id {id} was not found"))
    }

    /// Prefix the message with the operation and article it happened in,
    /// keeping the kind.
    pub fn with_context(self, operation: &str, id: ArticleId) -> Self {
        self.map_message(|msg| format!("{operation} article {id}: {msg}"))
    }

    /// Prefix the message with an operation that has no single article.
    pub fn with_operation(self, operation: &str) -> Self {
        self.map_message(|msg| format!("{operation}: {msg}"))
    }

    fn map_message(self, prefix: impl FnOnce(String) -> String) -> Self {
        match self {
            Self::Validation(msg) => Self::Validation(prefix(msg)),
            Self::NotFound(msg) => Self::NotFound(prefix(msg)),
            Self::InvalidState(msg) => Self::InvalidState(prefix(msg)),
            Self::ExternalUnavailable(msg) => Self::ExternalUnavailable(prefix(msg)),
            Self::Cancelled(msg) => Self::Cancelled(prefix(msg)),
            Self::Forbidden(msg) => Self::Forbidden(prefix(msg)),
            Self::Unauthorized(msg) => Self::Unauthorized(prefix(msg)),
            Self::Infrastructure(msg) => Self::Infrastructure(prefix(msg)),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::InvalidState(msg) => Self::InvalidState(msg),
            DomainError::Unavailable(msg) => Self::ExternalUnavailable(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

/// Attach operation context to any fallible collaborator call.
pub trait ResultExt<T> {
    fn context(self, operation: &str, id: ArticleId) -> ApplicationResult<T>;

    fn operation(self, operation: &str) -> ApplicationResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ApplicationError>,
{
    fn context(self, operation: &str, id: ArticleId) -> ApplicationResult<T> {
        self.map_err(|err| err.into().with_context(operation, id))
    }

    fn operation(self, operation: &str) -> ApplicationResult<T> {
        self.map_err(|err| err.into().with_operation(operation))
    }
}
