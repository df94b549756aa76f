// tests/support/helpers.rs
use super::mocks::{
    DummyClock, InMemoryContentStore, InMemorySummaryStore, Journal, RecordingPublishSink,
    StaticCreatorDirectory,
};
use axum::body::{self, Body};
use axum::http::StatusCode;
use moderation_core::application::{
    commands::articles::CreateArticleCommand, dto::ArticleSummaryDto,
    services::ApplicationServices,
};
use moderation_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const SAMPLE_TITLE: &str = "Why tide pools matter";

/// A body comfortably over the minimum content length.
pub fn sample_content() -> String {
    "Tide pools hold a surprising amount of life between the rocks. ".repeat(4)
}

/// One set of fakes wired into `ApplicationServices`, with handles kept so
/// tests can inspect and sabotage each collaborator.
pub struct Harness {
    pub journal: Journal,
    pub summaries: Arc<InMemorySummaryStore>,
    pub contents: Arc<InMemoryContentStore>,
    pub creators: Arc<StaticCreatorDirectory>,
    pub publisher: Arc<RecordingPublishSink>,
    pub services: Arc<ApplicationServices>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_creators(&[(42, "alice"), (7, "bob"), (9, "carol")])
    }

    pub fn with_creators(creators: &[(i64, &str)]) -> Self {
        let journal = Journal::default();
        let summaries = Arc::new(InMemorySummaryStore::new(journal.clone()));
        let contents = Arc::new(InMemoryContentStore::new(journal.clone()));
        let creators = Arc::new(StaticCreatorDirectory::new(creators));
        let publisher = Arc::new(RecordingPublishSink::new(journal.clone()));

        let services = Arc::new(ApplicationServices::new(
            summaries.clone(),
            contents.clone(),
            creators.clone(),
            publisher.clone(),
            Arc::new(DummyClock),
        ));

        Self {
            journal,
            summaries,
            contents,
            creators,
            publisher,
            services,
        }
    }

    /// Submit an article through the create command.
    pub async fn submit(&self, creator_id: i64, title: &str) -> ArticleSummaryDto {
        let command = CreateArticleCommand::builder()
            .creator_id(creator_id)
            .title(title)
            .content(sample_content())
            .build()
            .expect("complete command");
        self.services
            .article_commands
            .create_article(command)
            .await
            .expect("create article")
    }

    pub fn state(&self, directory_timeout: Duration) -> HttpState {
        HttpState {
            services: Arc::clone(&self.services),
            directory_timeout,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(self.state(Duration::from_secs(1)))
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Query string the gateway appends for an authenticated caller.
pub fn as_user(path: &str, id: i64) -> String {
    with_token(path, id, "USER")
}

pub fn as_moderator(path: &str, id: i64) -> String {
    with_token(path, id, "MODERATOR")
}

fn with_token(path: &str, id: i64, role: &str) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}tokenPayload.sub={id}&tokenPayload.role={role}")
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
