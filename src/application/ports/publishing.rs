// src/application/ports/publishing.rs
use crate::application::ApplicationResult;
use crate::domain::article::{ArticleContent, ArticleTitle};
use crate::domain::creator::CreatorId;
use async_trait::async_trait;

/// Finished article handed to the publishing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub creator_id: CreatorId,
}

#[async_trait]
pub trait PublishSink: Send + Sync {
    /// Fails with `ExternalUnavailable` when the service cannot be reached.
    async fn submit(&self, article: &PublishArticle) -> ApplicationResult<()>;
}
