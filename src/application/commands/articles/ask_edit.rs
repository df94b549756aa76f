use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult, ResultExt},
    },
    domain::article::{ArticleId, ModeratorComment, SummaryUpdate},
};

pub struct AskEditCommand {
    pub id: i64,
    pub comment: String,
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command), fields(article_id = command.id))]
    pub async fn ask_edit(&self, command: AskEditCommand) -> ApplicationResult<ArticleSummaryDto> {
        const OPERATION: &str = "ask edit for";

        let id = ArticleId::new(command.id)?;
        let comment = ModeratorComment::new(command.comment)?;
        let mut summary = self
            .summaries
            .find_by_id(id)
            .await
            .context(OPERATION, id)?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        summary.request_edit(comment);
        let updated = self
            .summaries
            .update(SummaryUpdate::from(&summary))
            .await
            .context(OPERATION, id)?;

        tracing::info!(article_id = %id, "edit requested");
        Ok(updated.into())
    }
}
