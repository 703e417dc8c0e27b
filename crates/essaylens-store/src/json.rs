//! JSON-file store.
//!
//! Layout inside the data directory:
//!
//! ```text
//! essays.jsonl     one EssayRecord per line, append-only
//! analytics.json   the running Analytics record
//! ```
//!
//! A single `tokio::sync::Mutex` serializes every mutation, so the
//! analytics counter is a read-then-write inside one critical section
//! rather than a racy unguarded update.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use essaylens_core::model::EssayRecord;

use crate::{sort_newest_first, Analytics, EssayStore, StoreError};

/// Filesystem-backed store rooted at a data directory.
pub struct JsonStore {
    data_dir: PathBuf,
    // Guards both files; all writes and the counter update go through it.
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open (creating if needed) a store in `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|source| StoreError::DataDir {
            path: data_dir.clone(),
            source,
        })?;
        Ok(Self {
            data_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn essays_path(&self) -> PathBuf {
        self.data_dir.join("essays.jsonl")
    }

    fn analytics_path(&self) -> PathBuf {
        self.data_dir.join("analytics.json")
    }

    fn read_all(&self) -> Result<Vec<EssayRecord>, StoreError> {
        let path = self.essays_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| StoreError::io(path.clone(), e))?;

        let mut records = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<EssayRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    // A corrupt line loses one record, not the whole store.
                    tracing::warn!(
                        "skipping corrupt record at {}:{}: {}",
                        path.display(),
                        line_no + 1,
                        e
                    );
                }
            }
        }
        Ok(records)
    }

    fn read_analytics(&self) -> Result<Option<Analytics>, StoreError> {
        let path = self.analytics_path();
        if !path.exists() {
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| StoreError::io(path.clone(), e))?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_analytics(&self, analytics: &Analytics) -> Result<(), StoreError> {
        let path = self.analytics_path();
        let json = serde_json::to_string_pretty(analytics)?;
        std::fs::write(&path, json).map_err(|e| StoreError::io(path, e))
    }

    fn append_record(&self, record: &EssayRecord) -> Result<(), StoreError> {
        use std::io::Write;

        let path = self.essays_path();
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::io(path.clone(), e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| StoreError::io(path, e))
    }

    /// The directory this store writes to.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl EssayStore for JsonStore {
    async fn save_essay(&self, record: &EssayRecord) -> Result<Uuid, StoreError> {
        let _guard = self.write_lock.lock().await;
        self.append_record(record)?;
        tracing::debug!(essay_id = %record.id, goal = %record.goal, "essay saved");
        Ok(record.id)
    }

    async fn essay(&self, id: Uuid) -> Result<Option<EssayRecord>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|r| r.id == id))
    }

    async fn essays_for_user(&self, user_id: &str) -> Result<Vec<EssayRecord>, StoreError> {
        let mut records: Vec<EssayRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn all_essays(&self) -> Result<Vec<EssayRecord>, StoreError> {
        let mut records = self.read_all()?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn analytics(&self) -> Result<Option<Analytics>, StoreError> {
        self.read_analytics()
    }

    async fn record_analysis(&self) -> Result<Analytics, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut analytics = self.read_analytics()?.unwrap_or_default();
        analytics.total_essays_analyzed += 1;
        self.write_analytics(&analytics)?;
        Ok(analytics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essaylens_core::analyzer::analyze;
    use essaylens_core::model::Goal;
    use std::sync::Arc;

    fn record(user: Option<&str>, content: &str) -> EssayRecord {
        let goal = Goal::Leadership;
        let analysis = analyze(content, &goal);
        EssayRecord::new(content, goal, analysis, user.map(String::from), None)
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let r = record(Some("maya"), "I led the club.");
        let id = store.save_essay(&r).await.unwrap();
        assert_eq!(id, r.id);

        let loaded = store.essay(id).await.unwrap().unwrap();
        assert_eq!(loaded.content, "I led the club.");
        assert_eq!(loaded.analysis, r.analysis);
    }

    #[tokio::test]
    async fn essays_for_user_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        let mut older = record(Some("maya"), "First draft.");
        older.created_at -= chrono::Duration::hours(2);
        let newer = record(Some("maya"), "Second draft.");
        let other = record(Some("sam"), "Unrelated.");

        store.save_essay(&older).await.unwrap();
        store.save_essay(&other).await.unwrap();
        store.save_essay(&newer).await.unwrap();

        let essays = store.essays_for_user("maya").await.unwrap();
        assert_eq!(essays.len(), 2);
        assert_eq!(essays[0].content, "Second draft.");
        assert_eq!(essays[1].content, "First draft.");
    }

    #[tokio::test]
    async fn anonymous_essays_not_returned_for_users() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.save_essay(&record(None, "Anonymous.")).await.unwrap();
        assert!(store.essays_for_user("maya").await.unwrap().is_empty());
        assert_eq!(store.all_essays().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn analytics_counter_starts_absent_then_increments() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        assert!(store.analytics().await.unwrap().is_none());

        let first = store.record_analysis().await.unwrap();
        assert_eq!(first.total_essays_analyzed, 1);
        let second = store.record_analysis().await.unwrap();
        assert_eq!(second.total_essays_analyzed, 2);

        let read_back = store.analytics().await.unwrap().unwrap();
        assert_eq!(read_back.total_essays_analyzed, 2);
    }

    #[tokio::test]
    async fn concurrent_increments_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());

        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.record_analysis().await.unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let analytics = store.analytics().await.unwrap().unwrap();
        assert_eq!(analytics.total_essays_analyzed, 20);
    }

    #[tokio::test]
    async fn corrupt_line_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();

        store.save_essay(&record(None, "Good one.")).await.unwrap();
        // Inject a corrupt line between two valid records.
        std::fs::write(
            dir.path().join("essays.jsonl"),
            format!(
                "{}\nnot json at all\n{}\n",
                serde_json::to_string(&record(None, "First.")).unwrap(),
                serde_json::to_string(&record(None, "Second.")).unwrap()
            ),
        )
        .unwrap();

        let essays = store.all_essays().await.unwrap();
        assert_eq!(essays.len(), 2);
    }

    #[tokio::test]
    async fn reopen_preserves_data() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonStore::open(dir.path()).unwrap();
            store.save_essay(&record(Some("maya"), "Draft.")).await.unwrap();
            store.record_analysis().await.unwrap();
        }
        let reopened = JsonStore::open(dir.path()).unwrap();
        assert_eq!(reopened.all_essays().await.unwrap().len(), 1);
        assert_eq!(
            reopened.analytics().await.unwrap().unwrap().total_essays_analyzed,
            1
        );
    }
}
