// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::moderation,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, patch},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let moderation_routes = Router::new()
        .route(
            "/articles",
            get(moderation::list_all_articles).post(moderation::create_article),
        )
        .route("/articles/user", get(moderation::list_own_articles))
        .route(
            "/articles/{id}",
            get(moderation::get_article).delete(moderation::remove_article),
        )
        .route("/articles/{id}/accept", patch(moderation::accept_article))
        .route("/articles/{id}/askEdit", patch(moderation::ask_edit));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .nest("/protected/moderation", moderation_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
