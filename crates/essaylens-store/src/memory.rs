//! In-memory store for tests and ephemeral runs.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use essaylens_core::model::EssayRecord;

use crate::{sort_newest_first, Analytics, EssayStore, StoreError};

/// An [`EssayStore`] held entirely in memory.
///
/// Tracks how many saves were made, which tests use to assert that a code
/// path actually persisted what it claimed to.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    save_count: AtomicU32,
}

#[derive(Default)]
struct Inner {
    essays: Vec<EssayRecord>,
    analytics: Option<Analytics>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of essays saved through this store.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EssayStore for MemoryStore {
    async fn save_essay(&self, record: &EssayRecord) -> Result<Uuid, StoreError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        let mut inner = self.inner.lock().await;
        inner.essays.push(record.clone());
        Ok(record.id)
    }

    async fn essay(&self, id: Uuid) -> Result<Option<EssayRecord>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.essays.iter().find(|r| r.id == id).cloned())
    }

    async fn essays_for_user(&self, user_id: &str) -> Result<Vec<EssayRecord>, StoreError> {
        let inner = self.inner.lock().await;
        let mut records: Vec<EssayRecord> = inner
            .essays
            .iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn all_essays(&self) -> Result<Vec<EssayRecord>, StoreError> {
        let inner = self.inner.lock().await;
        let mut records = inner.essays.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn analytics(&self) -> Result<Option<Analytics>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.analytics.clone())
    }

    async fn record_analysis(&self) -> Result<Analytics, StoreError> {
        let mut inner = self.inner.lock().await;
        let analytics = inner.analytics.get_or_insert_with(Analytics::default);
        analytics.total_essays_analyzed += 1;
        Ok(analytics.clone())
    }
}
