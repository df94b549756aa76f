use crate::domain::article::entity::{ArticleSummary, NewArticleSummary, SummaryUpdate};
use crate::domain::article::value_objects::{ArticleContent, ArticleId, PageRequest};
use crate::domain::creator::CreatorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Relational store of moderation summaries.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn list_by_creator(
        &self,
        creator_id: CreatorId,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>>;
    async fn list_all(&self, page: PageRequest) -> DomainResult<Vec<ArticleSummary>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>>;
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
    async fn exists_for_creator(&self, id: ArticleId, creator_id: CreatorId)
    -> DomainResult<bool>;
    async fn insert(&self, summary: NewArticleSummary) -> DomainResult<ArticleSummary>;
    async fn update(&self, update: SummaryUpdate) -> DomainResult<ArticleSummary>;
    /// Returns whether a row was removed. Deleting a missing id is not an error.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

/// Blob store for article bodies, keyed by article id.
///
/// Transport failures are reported as `DomainError::Unavailable`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<ArticleContent>>;
    async fn put(&self, id: ArticleId, content: &ArticleContent) -> DomainResult<()>;
    /// Deleting a missing blob succeeds.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
