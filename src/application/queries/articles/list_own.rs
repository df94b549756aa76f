use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationResult, ResultExt},
    },
    domain::{article::PageNumber, creator::CreatorId},
};

pub struct ListCreatorArticlesQuery {
    pub creator_id: i64,
    pub page: i64,
}

impl ArticleQueryService {
    /// Summaries submitted by one creator. Unknown creators and pages past
    /// the end give an empty list.
    pub async fn list_creator_articles(
        &self,
        query: ListCreatorArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let creator_id = CreatorId::new(query.creator_id)?;
        let page = PageNumber::new(query.page)?;

        let summaries = self
            .summaries
            .list_by_creator(creator_id, Self::page_request(page))
            .await
            .operation("list creator articles")?;

        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
