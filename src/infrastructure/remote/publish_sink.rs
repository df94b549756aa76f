// src/infrastructure/remote/publish_sink.rs
use super::{RemoteError, map_reqwest};
use crate::application::{
    error::ApplicationResult,
    ports::publishing::{PublishArticle, PublishSink},
};
use crate::config::RemoteServiceConfig;
use async_trait::async_trait;
use serde::Serialize;

const SERVICE: &str = "article service";

/// Hands approved articles to the public article service.
#[derive(Clone)]
pub struct HttpPublishSink {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublishRequest<'a> {
    title: &'a str,
    content: &'a str,
    creator_id: i64,
}

impl<'a> From<&'a PublishArticle> for PublishRequest<'a> {
    fn from(article: &'a PublishArticle) -> Self {
        Self {
            title: article.title.as_str(),
            content: article.content.as_str(),
            creator_id: i64::from(article.creator_id),
        }
    }
}

impl HttpPublishSink {
    pub fn new(config: &RemoteServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/internal/articles", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl PublishSink for HttpPublishSink {
    async fn submit(&self, article: &PublishArticle) -> ApplicationResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PublishRequest::from(article))
            .send()
            .await
            .map_err(|err| map_reqwest(SERVICE, err))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::from_status(SERVICE, status, body).into())
    }
}
