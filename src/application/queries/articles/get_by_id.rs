use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, ResultExt},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Assemble the full article. A summary whose content is missing counts
    /// as a missing article.
    #[tracing::instrument(skip(self, query), fields(article_id = query.id))]
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        const OPERATION: &str = "get";

        let id = ArticleId::new(query.id)?;
        let summary = self
            .summaries
            .find_by_id(id)
            .await
            .context(OPERATION, id)?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        let content = match self.contents.get(id).await.context(OPERATION, id)? {
            Some(content) => content,
            None => {
                tracing::debug!(article_id = %id, "summary has no content");
                return Err(ApplicationError::article_not_found(id));
            }
        };

        let creator = self
            .creators
            .get_one(summary.creator_id)
            .await
            .context(OPERATION, id)?;

        Ok(ArticleDto::from_parts(summary, content, creator))
    }
}
