// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    domain::creator::CreatorId,
};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use super::error::HttpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Moderator,
}

impl Role {
    pub fn can_moderate(self) -> bool {
        matches!(self, Role::Moderator)
    }
}

/// Caller identity forwarded by the gateway as `tokenPayload.sub` and
/// `tokenPayload.role` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: CreatorId,
    pub role: Role,
}

impl Caller {
    pub fn require_moderator(&self) -> Result<(), HttpError> {
        if self.role.can_moderate() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden("moderator role required").into())
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenPayloadParams {
    #[serde(rename = "tokenPayload.sub")]
    sub: Option<i64>,
    #[serde(rename = "tokenPayload.role")]
    role: Option<Role>,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<TokenPayloadParams>::try_from_uri(&parts.uri)
            .map_err(|_| ApplicationError::unauthorized("malformed token payload"))?;

        let (Some(sub), Some(role)) = (params.sub, params.role) else {
            return Err(ApplicationError::unauthorized("missing token payload").into());
        };

        let id = CreatorId::new(sub)
            .map_err(|_| ApplicationError::unauthorized("token subject must be a positive id"))?;

        Ok(Self { id, role })
    }
}
