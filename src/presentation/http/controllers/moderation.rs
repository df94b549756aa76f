// src/presentation/http/controllers/moderation.rs
use crate::application::{
    commands::articles::{
        AskEditCommand, CreateArticleCommand, PublishArticleCommand, RemoveArticleCommand,
    },
    dto::{ArticleDto, ArticleSummaryDto, NamedArticleSummaryDto, PublishOutcome},
    error::ApplicationError,
    queries::articles::{
        CheckOwnershipQuery, GetArticleByIdQuery, ListAllArticlesQuery, ListCreatorArticlesQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Caller;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page() -> i64 {
    1
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskEditRequest {
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublishResponse {
    pub outcome: PublishOutcome,
}

#[utoipa::path(
    get,
    path = "/protected/moderation/articles/user",
    params(PageParams),
    responses(
        (status = 200, description = "The caller's articles awaiting moderation.", body = [ArticleSummaryDto]),
        (status = 400, description = "Invalid page.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing token payload.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn list_own_articles(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_creator_articles(ListCreatorArticlesQuery {
            creator_id: caller.id.into(),
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/protected/moderation/articles",
    params(PageParams),
    responses(
        (status = 200, description = "Moderation queue with creator names.", body = [NamedArticleSummaryDto]),
        (status = 403, description = "Caller is not a moderator.", body = crate::presentation::http::error::ErrorResponse),
        (status = 408, description = "Lookup cancelled.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Creator directory unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn list_all_articles(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Vec<NamedArticleSummaryDto>>> {
    caller.require_moderator()?;

    let query = ListAllArticlesQuery::page(params.page)
        .with_timeout(state.directory_timeout)
        .with_cancellation(state.shutdown.child_token());

    state
        .services
        .article_queries
        .list_all_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/protected/moderation/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Full article with content and creator.", body = ArticleDto),
        (status = 403, description = "Caller neither moderates nor owns the article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    let queries = &state.services.article_queries;

    if !caller.role.can_moderate() {
        let owns = queries
            .owns_article(CheckOwnershipQuery {
                creator_id: caller.id.into(),
                article_id: id,
            })
            .await
            .into_http()?;
        if !owns {
            return Err(ApplicationError::forbidden("article belongs to another creator").into());
        }
    }

    queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/protected/moderation/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article submitted for moderation.", body = ArticleSummaryDto),
        (status = 400, description = "Invalid title or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleSummaryDto>)> {
    let command = CreateArticleCommand {
        creator_id: caller.id.into(),
        title: payload.title,
        content: payload.content,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/protected/moderation/articles/{id}/accept",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article handed to the publishing service.", body = PublishResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article awaits an edit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Publishing service unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn accept_article(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> HttpResult<Json<PublishResponse>> {
    caller.require_moderator()?;

    let outcome = state
        .services
        .article_commands
        .publish_article(PublishArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(PublishResponse { outcome }))
}

#[utoipa::path(
    patch,
    path = "/protected/moderation/articles/{id}/askEdit",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = AskEditRequest,
    responses(
        (status = 200, description = "Edit requested.", body = ArticleSummaryDto),
        (status = 400, description = "Blank comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn ask_edit(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<AskEditRequest>,
) -> HttpResult<Json<ArticleSummaryDto>> {
    caller.require_moderator()?;

    state
        .services
        .article_commands
        .ask_edit(AskEditCommand {
            id,
            comment: payload.comment,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/protected/moderation/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article rejected and removed."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Moderation"
)]
pub async fn remove_article(
    Extension(state): Extension<HttpState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    caller.require_moderator()?;

    state
        .services
        .article_commands
        .remove_article(RemoveArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
