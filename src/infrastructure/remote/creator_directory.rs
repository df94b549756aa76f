// src/infrastructure/remote/creator_directory.rs
use super::{RemoteError, map_reqwest};
use crate::application::{error::ApplicationResult, ports::creators::CreatorDirectory};
use crate::config::RemoteServiceConfig;
use crate::domain::creator::{Creator, CreatorId};
use async_trait::async_trait;
use std::collections::HashMap;

const SERVICE: &str = "creator directory";

/// Client for the identity service's internal profile endpoints.
#[derive(Clone)]
pub struct HttpCreatorDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCreatorDirectory {
    pub fn new(config: &RemoteServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|err| map_reqwest(SERVICE, err))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RemoteError::from_status(SERVICE, status, body))
        }
    }
}

/// The names endpoint answers positionally; pair each name with the id that
/// was asked for in the same slot.
fn zip_names(ids: &[CreatorId], names: Vec<String>) -> Result<HashMap<CreatorId, Creator>, RemoteError> {
    if names.len() != ids.len() {
        return Err(RemoteError::protocol(
            SERVICE,
            format!("asked for {} names, got {}", ids.len(), names.len()),
        ));
    }
    Ok(ids
        .iter()
        .zip(names)
        .map(|(id, name)| (*id, Creator::new(*id, name)))
        .collect())
}

/// The single-name endpoint returns a bare string body. Accept a JSON string
/// literal as well.
fn parse_single_name(body: &str) -> String {
    let trimmed = body.trim();
    serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| trimmed.to_string())
}

#[async_trait]
impl CreatorDirectory for HttpCreatorDirectory {
    async fn get_many(&self, ids: &[CreatorId]) -> ApplicationResult<HashMap<CreatorId, Creator>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let query: Vec<(&str, i64)> = ids.iter().map(|id| ("ids", i64::from(*id))).collect();
        let request = self
            .client
            .get(format!("{}/internal/profile/usernames", self.base_url))
            .query(&query);

        let names: Vec<String> = self
            .fetch(request)
            .await?
            .json()
            .await
            .map_err(|err| map_reqwest(SERVICE, err))?;

        tracing::debug!(requested = ids.len(), "creator names resolved");
        Ok(zip_names(ids, names)?)
    }

    async fn get_one(&self, id: CreatorId) -> ApplicationResult<Creator> {
        let request = self
            .client
            .get(format!("{}/internal/profile/{id}/username", self.base_url));

        let body = self
            .fetch(request)
            .await?
            .text()
            .await
            .map_err(|err| map_reqwest(SERVICE, err))?;

        let name = parse_single_name(&body);
        if name.is_empty() {
            return Err(RemoteError::protocol(SERVICE, format!("empty name for creator {id}")).into());
        }
        Ok(Creator::new(id, name))
    }
}
