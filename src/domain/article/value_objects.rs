use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 15;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 100;
pub const CONTENT_MAX_CHARS: usize = 18_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::Validation(format!(
            "{field} must contain at least {min} characters"
        )));
    }
    if len > max {
        return Err(DomainError::Validation(format!(
            "{field} must not contain more than {max} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_length("title", &value, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
        Ok(Self(value))
    }

    /// Rehydrate a title that was validated when it was first stored.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full body text of an article. Stored apart from the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        check_length("content", &value, CONTENT_MIN_CHARS, CONTENT_MAX_CHARS)?;
        Ok(Self(value))
    }

    /// Blobs come back from the content store as-is; they were validated on the way in.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeratorComment(String);

impl ModeratorComment {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "moderator comment cannot be blank".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeratorComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(u32);

impl PageNumber {
    pub fn new(page: i64) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        let page = u32::try_from(page)
            .map_err(|_| DomainError::Validation("page is out of range".into()))?;
        Ok(Self(page))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: PageNumber,
    size: u32,
}

impl PageRequest {
    pub fn new(page: PageNumber, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.get() - 1) * i64::from(self.size)
    }
}
