use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Moderation state of an article that is still held by this service.
///
/// Published and removed articles have no status: their summary is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModerationStatus {
    Moderating,
    EditRequested,
}

impl ModerationStatus {
    pub const ALL: [Self; 2] = [Self::Moderating, Self::EditRequested];

    /// Storage code. Persisted values, never renumber.
    pub fn code(self) -> i16 {
        match self {
            Self::Moderating => 0,
            Self::EditRequested => 1,
        }
    }

    pub fn from_code(code: i16) -> DomainResult<Self> {
        match code {
            0 => Ok(Self::Moderating),
            1 => Ok(Self::EditRequested),
            other => Err(DomainError::Persistence(format!(
                "unknown moderation status code {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Moderating => "MODERATING",
            Self::EditRequested => "EDIT_REQUESTED",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
