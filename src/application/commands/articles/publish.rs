// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::PublishOutcome,
        error::{ApplicationError, ApplicationResult, ResultExt},
        ports::publishing::PublishArticle,
    },
    domain::article::ArticleId,
};

pub struct PublishArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Accept an article and hand it to the publishing service.
    ///
    /// Nothing is deleted unless the submission succeeds. Once it has, a
    /// failed cleanup is reported as `CleanupPending` instead of an error:
    /// the article is already public and the remaining local copy may be
    /// published again if the moderator retries.
    #[tracing::instrument(skip(self, command), fields(article_id = command.id))]
    pub async fn publish_article(
        &self,
        command: PublishArticleCommand,
    ) -> ApplicationResult<PublishOutcome> {
        const OPERATION: &str = "publish";

        let id = ArticleId::new(command.id)?;
        let summary = self
            .summaries
            .find_by_id(id)
            .await
            .context(OPERATION, id)?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        summary.ensure_publishable()?;

        let content = self
            .contents
            .get(id)
            .await
            .context(OPERATION, id)?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        let article = PublishArticle {
            title: summary.title,
            content,
            creator_id: summary.creator_id,
        };
        self.publisher
            .submit(&article)
            .await
            .context(OPERATION, id)?;

        match self.discard(OPERATION, id).await {
            Ok(()) => {
                tracing::info!(article_id = %id, "article published");
                Ok(PublishOutcome::Completed)
            }
            Err(err) => {
                tracing::warn!(
                    article_id = %id,
                    error = %err,
                    "article published but local copy was not removed"
                );
                Ok(PublishOutcome::CleanupPending)
            }
        }
    }
}
