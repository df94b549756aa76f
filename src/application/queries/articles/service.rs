use std::sync::Arc;

use crate::{
    application::ports::creators::CreatorDirectory,
    domain::article::{ContentStore, PageNumber, PageRequest, SummaryStore},
};

/// Number of summaries per listing page.
pub const ARTICLE_SUMMARIES_PAGE_SIZE: u32 = 10;

pub struct ArticleQueryService {
    pub(super) summaries: Arc<dyn SummaryStore>,
    pub(super) contents: Arc<dyn ContentStore>,
    pub(super) creators: Arc<dyn CreatorDirectory>,
}

impl ArticleQueryService {
    pub fn new(
        summaries: Arc<dyn SummaryStore>,
        contents: Arc<dyn ContentStore>,
        creators: Arc<dyn CreatorDirectory>,
    ) -> Self {
        Self {
            summaries,
            contents,
            creators,
        }
    }

    pub(super) fn page_request(page: PageNumber) -> PageRequest {
        PageRequest::new(page, ARTICLE_SUMMARIES_PAGE_SIZE)
    }
}
