// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ResultExt,
        ports::{publishing::PublishSink, time::Clock},
        ApplicationResult,
    },
    domain::article::{ArticleId, ContentStore, SummaryStore},
};

pub struct ArticleCommandService {
    pub(super) summaries: Arc<dyn SummaryStore>,
    pub(super) contents: Arc<dyn ContentStore>,
    pub(super) publisher: Arc<dyn PublishSink>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        summaries: Arc<dyn SummaryStore>,
        contents: Arc<dyn ContentStore>,
        publisher: Arc<dyn PublishSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            summaries,
            contents,
            publisher,
            clock,
        }
    }

    /// Drop an article from moderation: content first, then the summary.
    ///
    /// A summary without content already reads as not found, so a failure
    /// between the two steps never resurrects the article. A content failure
    /// leaves both in place.
    pub(super) async fn discard(&self, operation: &str, id: ArticleId) -> ApplicationResult<()> {
        self.contents.delete(id).await.context(operation, id)?;
        let removed = self.summaries.delete(id).await.context(operation, id)?;
        if !removed {
            tracing::debug!(article_id = %id, "summary already deleted");
        }
        Ok(())
    }
}
