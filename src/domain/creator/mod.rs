use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// User id of an article author, as issued by the identity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatorId(pub i64);

impl CreatorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("creator id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CreatorId> for i64 {
    fn from(value: CreatorId) -> Self {
        value.0
    }
}

impl fmt::Display for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display data for an author. Never persisted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
}

impl Creator {
    pub fn new(id: CreatorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
