// tests/support/mocks/remote.rs
use super::Journal;
use async_trait::async_trait;
use moderation_core::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        creators::CreatorDirectory,
        publishing::{PublishArticle, PublishSink},
    },
};
use moderation_core::domain::creator::{Creator, CreatorId};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/* -------------------------------- CreatorDirectory -------------------------------- */

/// Directory backed by a fixed id→name table. Unknown ids are left out of
/// batch answers.
pub struct StaticCreatorDirectory {
    names: HashMap<CreatorId, String>,
    requests: Mutex<Vec<Vec<CreatorId>>>,
    delay: Mutex<Option<Duration>>,
    pub unavailable: AtomicBool,
}

impl StaticCreatorDirectory {
    pub fn new(entries: &[(i64, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(id, name)| (CreatorId(*id), (*name).to_string()))
                .collect(),
            requests: Mutex::new(Vec::new()),
            delay: Mutex::new(None),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every lookup sleep before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Id lists received by `get_many`, one entry per call.
    pub fn batch_requests(&self) -> Vec<Vec<CreatorId>> {
        self.requests.lock().unwrap().clone()
    }

    async fn pause(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(ApplicationError::external_unavailable("creator directory offline"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CreatorDirectory for StaticCreatorDirectory {
    async fn get_many(&self, ids: &[CreatorId]) -> ApplicationResult<HashMap<CreatorId, Creator>> {
        self.requests.lock().unwrap().push(ids.to_vec());
        self.pause().await;
        self.check()?;
        Ok(ids
            .iter()
            .filter_map(|id| {
                self.names
                    .get(id)
                    .map(|name| (*id, Creator::new(*id, name.clone())))
            })
            .collect())
    }

    async fn get_one(&self, id: CreatorId) -> ApplicationResult<Creator> {
        self.pause().await;
        self.check()?;
        self.names
            .get(&id)
            .map(|name| Creator::new(id, name.clone()))
            .ok_or_else(|| ApplicationError::not_found(format!("creator {id} not found")))
    }
}

/* -------------------------------- PublishSink -------------------------------- */

pub struct RecordingPublishSink {
    submitted: Mutex<Vec<PublishArticle>>,
    journal: Journal,
    pub unavailable: AtomicBool,
}

impl RecordingPublishSink {
    pub fn new(journal: Journal) -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
            journal,
            unavailable: AtomicBool::new(false),
        }
    }

    pub fn submitted(&self) -> Vec<PublishArticle> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishSink for RecordingPublishSink {
    async fn submit(&self, article: &PublishArticle) -> ApplicationResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApplicationError::external_unavailable("article service offline"));
        }
        self.submitted.lock().unwrap().push(article.clone());
        self.journal.record("publish.submit");
        Ok(())
    }
}
