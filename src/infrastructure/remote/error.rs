use crate::application::error::ApplicationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to a neighbouring HTTP service, before it is mapped into
/// the error vocabulary of the calling layer.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Connection, timeout or 5xx/429. Retrying later may succeed.
    #[error("{service} unavailable: {detail}")]
    Unavailable { service: &'static str, detail: String },

    #[error("{service} rejected the request with {status}: {detail}")]
    Rejected {
        service: &'static str,
        status: StatusCode,
        detail: String,
    },

    #[error("{service} sent an unreadable response: {detail}")]
    Protocol { service: &'static str, detail: String },
}

impl RemoteError {
    pub fn protocol(service: &'static str, detail: impl Into<String>) -> Self {
        Self::Protocol {
            service,
            detail: detail.into(),
        }
    }

    pub fn from_status(service: &'static str, status: StatusCode, body: String) -> Self {
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            Self::Unavailable {
                service,
                detail: format!("status {status}"),
            }
        } else {
            Self::Rejected {
                service,
                status,
                detail: body,
            }
        }
    }
}

pub fn map_reqwest(service: &'static str, err: reqwest::Error) -> RemoteError {
    if err.is_decode() {
        return RemoteError::protocol(service, err.to_string());
    }
    if let Some(status) = err.status() {
        return RemoteError::from_status(service, status, err.to_string());
    }
    // connect, timeout, request body and redirect failures
    RemoteError::Unavailable {
        service,
        detail: err.to_string(),
    }
}

impl From<RemoteError> for ApplicationError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Unavailable { .. } => ApplicationError::external_unavailable(err.to_string()),
            RemoteError::Rejected { status, .. } if status == StatusCode::NOT_FOUND => {
                ApplicationError::not_found(err.to_string())
            }
            RemoteError::Rejected { .. } | RemoteError::Protocol { .. } => {
                ApplicationError::infrastructure(err.to_string())
            }
        }
    }
}
