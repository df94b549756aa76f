// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, CreatorDirectoryPort, PublishSinkPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ContentStore, SummaryStore},
};

/// Entry point for the API layer: the moderation commands and queries wired
/// to one set of collaborators. Holds no state of its own.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        summary_store: Arc<dyn SummaryStore>,
        content_store: Arc<dyn ContentStore>,
        creator_directory: Arc<CreatorDirectoryPort>,
        publish_sink: Arc<PublishSinkPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&summary_store),
            Arc::clone(&content_store),
            Arc::clone(&publish_sink),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&summary_store),
            Arc::clone(&content_store),
            Arc::clone(&creator_directory),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
