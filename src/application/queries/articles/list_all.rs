use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::ArticleQueryService;
use crate::{
    application::{
        dto::NamedArticleSummaryDto,
        error::{ApplicationError, ApplicationResult, ResultExt},
    },
    domain::{
        article::{ArticleSummary, PageNumber},
        creator::{Creator, CreatorId},
    },
};

pub struct ListAllArticlesQuery {
    pub page: i64,
    /// Upper bound for the creator lookup.
    pub timeout: Option<Duration>,
    pub cancel: Option<CancellationToken>,
}

impl ListAllArticlesQuery {
    pub fn page(page: i64) -> Self {
        Self {
            page,
            timeout: None,
            cancel: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl ArticleQueryService {
    /// Moderator queue: one page of summaries with their creators resolved in
    /// a single directory call. Either the whole page is returned or an
    /// error; never a partial list.
    #[tracing::instrument(skip(self, query), fields(page = query.page))]
    pub async fn list_all_articles(
        &self,
        query: ListAllArticlesQuery,
    ) -> ApplicationResult<Vec<NamedArticleSummaryDto>> {
        let page = PageNumber::new(query.page)?;
        let summaries = self
            .summaries
            .list_all(Self::page_request(page))
            .await
            .operation("list articles")?;
        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let ids = distinct_creator_ids(&summaries);
        let creators = self
            .resolve_creators(&ids, query.timeout, query.cancel.as_ref())
            .await
            .operation("list articles")?;

        attach_creators(summaries, &creators)
    }

    async fn resolve_creators(
        &self,
        ids: &[CreatorId],
        timeout: Option<Duration>,
        cancel: Option<&CancellationToken>,
    ) -> ApplicationResult<HashMap<CreatorId, Creator>> {
        let lookup = async {
            match timeout {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.creators.get_many(ids)).await {
                        Ok(result) => result,
                        Err(_) => Err(ApplicationError::external_unavailable(format!(
                            "creator lookup timed out after {} ms",
                            limit.as_millis()
                        ))),
                    }
                }
                None => self.creators.get_many(ids).await,
            }
        };

        match cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => {
                    Err(ApplicationError::cancelled("creator lookup cancelled by caller"))
                }
                result = lookup => result,
            },
            None => lookup.await,
        }
    }
}

/// Creator ids in first-seen order, without repeats.
fn distinct_creator_ids(summaries: &[ArticleSummary]) -> Vec<CreatorId> {
    let mut seen = HashSet::new();
    summaries
        .iter()
        .map(|summary| summary.creator_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

fn attach_creators(
    summaries: Vec<ArticleSummary>,
    creators: &HashMap<CreatorId, Creator>,
) -> ApplicationResult<Vec<NamedArticleSummaryDto>> {
    summaries
        .into_iter()
        .map(|summary| {
            let creator = creators.get(&summary.creator_id).cloned().ok_or_else(|| {
                ApplicationError::infrastructure(format!(
                    "creator directory returned no entry for creator {}",
                    summary.creator_id
                ))
            })?;
            Ok(NamedArticleSummaryDto::from_parts(summary, creator))
        })
        .collect()
}
