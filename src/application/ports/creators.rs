// src/application/ports/creators.rs
use crate::application::ApplicationResult;
use crate::domain::creator::{Creator, CreatorId};
use async_trait::async_trait;
use std::collections::HashMap;

/// Remote lookup of author display data.
#[async_trait]
pub trait CreatorDirectory: Send + Sync {
    /// Resolve a batch of creators in one call.
    ///
    /// The result is keyed by id so callers never depend on the order in
    /// which the remote side answers. Ids the directory does not know are
    /// absent from the map.
    async fn get_many(&self, ids: &[CreatorId]) -> ApplicationResult<HashMap<CreatorId, Creator>>;

    async fn get_one(&self, id: CreatorId) -> ApplicationResult<Creator>;
}
