use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult, ResultExt},
    domain::article::ArticleId,
};

pub struct RemoveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Reject an article. Allowed from either status.
    #[tracing::instrument(skip(self, command), fields(article_id = command.id))]
    pub async fn remove_article(&self, command: RemoveArticleCommand) -> ApplicationResult<()> {
        const OPERATION: &str = "remove";

        let id = ArticleId::new(command.id)?;
        if !self.summaries.exists(id).await.context(OPERATION, id)? {
            return Err(ApplicationError::article_not_found(id));
        }

        self.discard(OPERATION, id).await?;
        tracing::info!(article_id = %id, "article removed");
        Ok(())
    }
}
