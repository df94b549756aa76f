// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationResult, ResultExt},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticleSummary},
        creator::CreatorId,
    },
};

pub struct CreateArticleCommand {
    pub creator_id: i64,
    pub title: String,
    pub content: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    creator_id: Option<i64>,
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn creator_id(mut self, creator_id: i64) -> Self {
        self.creator_id = Some(creator_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            creator_id: self.creator_id.ok_or("creator_id is required")?,
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Submit a draft for moderation.
    ///
    /// The summary is written first to obtain the id, then the body. If the
    /// body write fails the summary stays behind without content, which every
    /// read treats as a missing article.
    #[tracing::instrument(skip(self, command), fields(creator_id = command.creator_id))]
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let creator_id = CreatorId::new(command.creator_id)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let created = self
            .summaries
            .insert(NewArticleSummary::new(title, creator_id, now))
            .await
            .operation("create article")?;
        let id = created.id;

        if let Err(err) = self.contents.put(id, &content).await.context("create", id) {
            tracing::warn!(
                article_id = %id,
                error = %err,
                "content write failed, summary left without content"
            );
            return Err(err);
        }

        tracing::info!(article_id = %id, "article submitted for moderation");
        Ok(created.into())
    }
}
