use crate::domain::article::{
    ArticleContent, ArticleSummary, ModerationStatus, ModeratorComment,
};
use crate::domain::creator::Creator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatorDto {
    pub id: i64,
    pub name: String,
}

impl From<Creator> for CreatorDto {
    fn from(creator: Creator) -> Self {
        Self {
            id: creator.id.into(),
            name: creator.name,
        }
    }
}

/// Summary as shown to its author: no creator block.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub status: ModerationStatus,
    #[serde(default)]
    pub moderator_comment: Option<String>,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        let status = summary.status();
        let moderator_comment = summary
            .moderator_comment()
            .map(|comment| comment.as_str().to_owned());
        Self {
            id: summary.id.into(),
            title: summary.title.into_inner(),
            created_at: summary.created_at,
            status,
            moderator_comment,
        }
    }
}

/// Summary plus the resolved creator, for the moderator queue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NamedArticleSummaryDto {
    #[serde(flatten)]
    pub summary: ArticleSummaryDto,
    pub creator: CreatorDto,
}

impl NamedArticleSummaryDto {
    pub fn from_parts(summary: ArticleSummary, creator: Creator) -> Self {
        Self {
            summary: summary.into(),
            creator: creator.into(),
        }
    }
}

/// Full article assembled from summary, content and creator on read.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub status: ModerationStatus,
    #[serde(default)]
    pub moderator_comment: Option<String>,
    pub creator: CreatorDto,
}

impl ArticleDto {
    pub fn from_parts(summary: ArticleSummary, content: ArticleContent, creator: Creator) -> Self {
        let status = summary.status();
        let moderator_comment = summary.moderator_comment().map(ModeratorComment::to_string);
        Self {
            id: summary.id.into(),
            title: summary.title.into_inner(),
            content: content.into_inner(),
            created_at: summary.created_at,
            status,
            moderator_comment,
            creator: creator.into(),
        }
    }
}

/// Result of handing an article to the publishing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PublishOutcome {
    /// Published and removed from moderation.
    Completed,
    /// Published, but the local copy could not be fully removed. A retry may
    /// publish the article a second time.
    CleanupPending,
}
