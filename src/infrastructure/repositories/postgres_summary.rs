// src/infrastructure/repositories/postgres_summary.rs
use super::map_sqlx;
use crate::domain::article::{
    ArticleId, ArticleSummary, ArticleTitle, ModerationState, ModerationStatus, ModeratorComment,
    NewArticleSummary, PageRequest, SummaryStore, SummaryUpdate,
};
use crate::domain::creator::CreatorId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SELECT_SUMMARY: &str = "SELECT s.id, s.title, s.created_at, s.status, s.creator_id, c.comment \
     FROM article_summaries s \
     LEFT JOIN moderator_comments c ON c.article_id = s.id";

#[derive(Clone)]
pub struct PostgresSummaryStore {
    pool: PgPool,
}

impl PostgresSummaryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        let sql = format!("{SELECT_SUMMARY} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SummaryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleSummary::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
    status: i16,
    creator_id: i64,
    comment: Option<String>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        let status = ModerationStatus::from_code(row.status)?;
        let comment = row
            .comment
            .map(ModeratorComment::new)
            .transpose()
            .map_err(|err| DomainError::Persistence(format!("stored comment unreadable: {err}")))?;

        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::from_stored(row.title),
            creator_id: CreatorId::new(row.creator_id)?,
            created_at: row.created_at,
            state: ModerationState::from_parts(status, comment)?,
        })
    }
}

fn into_summaries(rows: Vec<SummaryRow>) -> DomainResult<Vec<ArticleSummary>> {
    rows.into_iter().map(ArticleSummary::try_from).collect()
}

#[async_trait]
impl SummaryStore for PostgresSummaryStore {
    async fn list_by_creator(
        &self,
        creator_id: CreatorId,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let sql = format!(
            "{SELECT_SUMMARY} WHERE s.creator_id = $1 ORDER BY s.created_at, s.id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, SummaryRow>(&sql)
            .bind(i64::from(creator_id))
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_summaries(rows)
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<Vec<ArticleSummary>> {
        let sql = format!("{SELECT_SUMMARY} ORDER BY s.created_at, s.id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, SummaryRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_summaries(rows)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        self.fetch_one(id).await
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM article_summaries WHERE id = $1)",
        )
        .bind(i64::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn exists_for_creator(
        &self,
        id: ArticleId,
        creator_id: CreatorId,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM article_summaries WHERE id = $1 AND creator_id = $2)",
        )
        .bind(i64::from(id))
        .bind(i64::from(creator_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, summary: NewArticleSummary) -> DomainResult<ArticleSummary> {
        let status = ModerationStatus::Moderating;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO article_summaries (title, created_at, status, creator_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(summary.title.as_str())
        .bind(summary.created_at)
        .bind(status.code())
        .bind(i64::from(summary.creator_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(summary.into_summary(ArticleId::new(id)?))
    }

    async fn update(&self, update: SummaryUpdate) -> DomainResult<ArticleSummary> {
        let SummaryUpdate { id, state } = update;
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query("UPDATE article_summaries SET status = $1 WHERE id = $2")
            .bind(state.status().code())
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }

        match state.comment() {
            Some(comment) => {
                sqlx::query(
                    "INSERT INTO moderator_comments (article_id, comment) VALUES ($1, $2)
                     ON CONFLICT (article_id) DO UPDATE SET comment = EXCLUDED.comment",
                )
                .bind(i64::from(id))
                .bind(comment.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            }
            None => {
                sqlx::query("DELETE FROM moderator_comments WHERE article_id = $1")
                    .bind(i64::from(id))
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
            }
        }

        tx.commit().await.map_err(map_sqlx)?;

        self.fetch_one(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        // moderator_comments rows go with the summary via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM article_summaries WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
