use crate::domain::errors::DomainError;

const CNT_COMMENT_ARTICLE: &str = "moderator_comments_article_id_fkey";
const CNT_SUMMARY_STATUS: &str = "article_summaries_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_SUMMARY_STATUS => {
                        DomainError::Persistence("unknown moderation status code".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    // admin_shutdown, cannot_connect_now
                    "57P01" | "57P03" => {
                        return DomainError::Unavailable(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => DomainError::Unavailable(err.to_string()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
