use super::ArticleQueryService;
use crate::{
    application::error::{ApplicationResult, ResultExt},
    domain::{article::ArticleId, creator::CreatorId},
};

pub struct CheckOwnershipQuery {
    pub creator_id: i64,
    pub article_id: i64,
}

impl ArticleQueryService {
    /// True only when the article exists and belongs to the creator. A
    /// missing article is reported the same way as someone else's, so callers
    /// cannot tell which ids exist.
    pub async fn owns_article(&self, query: CheckOwnershipQuery) -> ApplicationResult<bool> {
        let creator_id = CreatorId::new(query.creator_id)?;
        let id = ArticleId::new(query.article_id)?;
        self.summaries
            .exists_for_creator(id, creator_id)
            .await
            .context("check ownership of", id)
    }
}
