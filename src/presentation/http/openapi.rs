// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::moderation::list_own_articles,
        crate::presentation::http::controllers::moderation::list_all_articles,
        crate::presentation::http::controllers::moderation::get_article,
        crate::presentation::http::controllers::moderation::create_article,
        crate::presentation::http::controllers::moderation::accept_article,
        crate::presentation::http::controllers::moderation::ask_edit,
        crate::presentation::http::controllers::moderation::remove_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::moderation::PageParams,
            crate::presentation::http::controllers::moderation::CreateArticleRequest,
            crate::presentation::http::controllers::moderation::AskEditRequest,
            crate::presentation::http::controllers::moderation::PublishResponse,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::NamedArticleSummaryDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::CreatorDto,
            crate::application::dto::PublishOutcome,
            crate::domain::article::ModerationStatus
        )
    ),
    tags(
        (name = "Moderation", description = "Article moderation endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Moderation API",
        description = "Review queue for submitted articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
