// src/domain/article/entity.rs
use crate::domain::article::status::ModerationStatus;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, ModeratorComment};
use crate::domain::creator::CreatorId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Status together with the data that only exists in that status. A comment
/// can only be attached to an edit request, so the two travel as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationState {
    Moderating,
    EditRequested { comment: ModeratorComment },
}

impl ModerationState {
    pub fn status(&self) -> ModerationStatus {
        match self {
            Self::Moderating => ModerationStatus::Moderating,
            Self::EditRequested { .. } => ModerationStatus::EditRequested,
        }
    }

    pub fn comment(&self) -> Option<&ModeratorComment> {
        match self {
            Self::Moderating => None,
            Self::EditRequested { comment } => Some(comment),
        }
    }

    /// Rebuild from the two stored columns, rejecting combinations the
    /// service never writes.
    pub fn from_parts(
        status: ModerationStatus,
        comment: Option<ModeratorComment>,
    ) -> DomainResult<Self> {
        match (status, comment) {
            (ModerationStatus::Moderating, None) => Ok(Self::Moderating),
            (ModerationStatus::EditRequested, Some(comment)) => {
                Ok(Self::EditRequested { comment })
            }
            (ModerationStatus::Moderating, Some(_)) => Err(DomainError::Persistence(
                "moderating article carries a moderator comment".into(),
            )),
            (ModerationStatus::EditRequested, None) => Err(DomainError::Persistence(
                "edit request is missing its moderator comment".into(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub creator_id: CreatorId,
    pub created_at: DateTime<Utc>,
    pub state: ModerationState,
}

impl ArticleSummary {
    pub fn status(&self) -> ModerationStatus {
        self.state.status()
    }

    pub fn moderator_comment(&self) -> Option<&ModeratorComment> {
        self.state.comment()
    }

    /// Ask the author for changes. Allowed from any status; a newer comment
    /// replaces the previous one.
    pub fn request_edit(&mut self, comment: ModeratorComment) {
        self.state = ModerationState::EditRequested { comment };
    }

    pub fn ensure_publishable(&self) -> DomainResult<()> {
        match self.state {
            ModerationState::Moderating => Ok(()),
            ModerationState::EditRequested { .. } => Err(DomainError::InvalidState(format!(
                "article {} is not in {} status",
                self.id,
                ModerationStatus::Moderating
            ))),
        }
    }

    pub fn apply(&mut self, update: &SummaryUpdate) {
        self.state = update.state.clone();
    }
}

#[derive(Debug, Clone)]
pub struct NewArticleSummary {
    pub title: ArticleTitle,
    pub creator_id: CreatorId,
    pub created_at: DateTime<Utc>,
}

impl NewArticleSummary {
    pub fn new(title: ArticleTitle, creator_id: CreatorId, created_at: DateTime<Utc>) -> Self {
        Self {
            title,
            creator_id,
            created_at,
        }
    }

    /// New summaries always enter moderation.
    pub fn into_summary(self, id: ArticleId) -> ArticleSummary {
        ArticleSummary {
            id,
            title: self.title,
            creator_id: self.creator_id,
            created_at: self.created_at,
            state: ModerationState::Moderating,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryUpdate {
    pub id: ArticleId,
    pub state: ModerationState,
}

impl From<&ArticleSummary> for SummaryUpdate {
    fn from(summary: &ArticleSummary) -> Self {
        Self {
            id: summary.id,
            state: summary.state.clone(),
        }
    }
}
