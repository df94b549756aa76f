// tests/support/mocks/stores.rs
use super::Journal;
use async_trait::async_trait;
use moderation_core::domain::article::{
    ArticleContent, ArticleId, ArticleSummary, ContentStore, NewArticleSummary, PageRequest,
    SummaryStore, SummaryUpdate,
};
use moderation_core::domain::creator::CreatorId;
use moderation_core::domain::errors::{DomainError, DomainResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

fn unavailable(store: &str) -> DomainError {
    DomainError::Unavailable(format!("{store} offline"))
}

/* -------------------------------- SummaryStore -------------------------------- */

/// Summary table kept in memory, ordered like the Postgres adapter
/// (`created_at`, then id).
pub struct InMemorySummaryStore {
    rows: Mutex<BTreeMap<i64, ArticleSummary>>,
    next_id: AtomicI64,
    journal: Journal,
    pub fail_reads: AtomicBool,
    pub fail_insert: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl InMemorySummaryStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            journal,
            fail_reads: AtomicBool::new(false),
            fail_insert: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn get(&self, id: i64) -> Option<ArticleSummary> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_reads(&self) -> DomainResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(unavailable("summary store"))
        } else {
            Ok(())
        }
    }

    fn page(&self, page: PageRequest, filter: impl Fn(&ArticleSummary) -> bool) -> Vec<ArticleSummary> {
        let mut rows: Vec<ArticleSummary> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|row| filter(row))
            .cloned()
            .collect();
        rows.sort_by_key(|row| (row.created_at, row.id));
        rows.into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect()
    }
}

#[async_trait]
impl SummaryStore for InMemorySummaryStore {
    async fn list_by_creator(
        &self,
        creator_id: CreatorId,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        self.check_reads()?;
        Ok(self.page(page, |row| row.creator_id == creator_id))
    }

    async fn list_all(&self, page: PageRequest) -> DomainResult<Vec<ArticleSummary>> {
        self.check_reads()?;
        Ok(self.page(page, |_| true))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        self.check_reads()?;
        Ok(self.get(id.0))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().contains_key(&id.0))
    }

    async fn exists_for_creator(
        &self,
        id: ArticleId,
        creator_id: CreatorId,
    ) -> DomainResult<bool> {
        self.check_reads()?;
        Ok(self
            .get(id.0)
            .is_some_and(|row| row.creator_id == creator_id))
    }

    async fn insert(&self, summary: NewArticleSummary) -> DomainResult<ArticleSummary> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(unavailable("summary store"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = summary.into_summary(ArticleId::new(id)?);
        self.rows.lock().unwrap().insert(id, stored.clone());
        self.journal.record(format!("summary.insert:{id}"));
        Ok(stored)
    }

    async fn update(&self, update: SummaryUpdate) -> DomainResult<ArticleSummary> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound(format!("article {} not found", update.id)))?;
        row.apply(&update);
        self.journal.record(format!("summary.update:{}", update.id));
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(unavailable("summary store"));
        }
        let removed = self.rows.lock().unwrap().remove(&id.0).is_some();
        self.journal.record(format!("summary.delete:{id}"));
        Ok(removed)
    }
}

/* -------------------------------- ContentStore -------------------------------- */

pub struct InMemoryContentStore {
    blobs: Mutex<HashMap<i64, ArticleContent>>,
    journal: Journal,
    pub fail_get: AtomicBool,
    pub fail_put: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl InMemoryContentStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            journal,
            fail_get: AtomicBool::new(false),
            fail_put: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.blobs.lock().unwrap().contains_key(&id)
    }

    pub fn text(&self, id: i64) -> Option<String> {
        self.blobs
            .lock()
            .unwrap()
            .get(&id)
            .map(|content| content.as_str().to_string())
    }

    /// Drop a blob behind the service's back, leaving an orphaned summary.
    pub fn forget(&self, id: i64) {
        self.blobs.lock().unwrap().remove(&id);
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get(&self, id: ArticleId) -> DomainResult<Option<ArticleContent>> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(unavailable("content store"));
        }
        Ok(self.blobs.lock().unwrap().get(&id.0).cloned())
    }

    async fn put(&self, id: ArticleId, content: &ArticleContent) -> DomainResult<()> {
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(unavailable("content store"));
        }
        self.blobs.lock().unwrap().insert(id.0, content.clone());
        self.journal.record(format!("content.put:{id}"));
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(unavailable("content store"));
        }
        self.blobs.lock().unwrap().remove(&id.0);
        self.journal.record(format!("content.delete:{id}"));
        Ok(())
    }
}
