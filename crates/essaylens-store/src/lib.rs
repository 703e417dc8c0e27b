//! essaylens-store — Essay persistence and the analytics counter.
//!
//! Defines the async [`EssayStore`] seam plus two implementations: a
//! JSON-file store for real use and an in-memory store for tests. All
//! mutation goes through a single writer, so concurrent analyses cannot
//! lose counter updates.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use essaylens_core::model::EssayRecord;

pub mod error;
pub mod json;
pub mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;

/// Display figures for the landing/stats surface when no real data has
/// been recorded yet. These are the marketing seed values from the
/// original product, kept as presentation fallbacks only — they are never
/// written into the store.
pub const FALLBACK_ESSAYS_ANALYZED: u64 = 1247;
pub const FALLBACK_STUDENTS_HELPED: u64 = 892;
pub const FALLBACK_IMPROVEMENT_PERCENT: u64 = 23;

/// The single running analytics record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    /// Total analyses performed through this store.
    pub total_essays_analyzed: u64,
}

/// Async persistence seam for essay analyses.
#[async_trait]
pub trait EssayStore: Send + Sync {
    /// Persist a record, returning its ID.
    async fn save_essay(&self, record: &EssayRecord) -> Result<Uuid, StoreError>;

    /// Fetch one record by ID.
    async fn essay(&self, id: Uuid) -> Result<Option<EssayRecord>, StoreError>;

    /// All essays for one student, newest first.
    async fn essays_for_user(&self, user_id: &str) -> Result<Vec<EssayRecord>, StoreError>;

    /// Every stored essay, newest first.
    async fn all_essays(&self) -> Result<Vec<EssayRecord>, StoreError>;

    /// The current analytics record, if any analysis has been recorded.
    async fn analytics(&self) -> Result<Option<Analytics>, StoreError>;

    /// Bump the total-analyses counter. Serialized through the store's
    /// single writer; concurrent calls never lose an increment.
    async fn record_analysis(&self) -> Result<Analytics, StoreError>;
}

/// Sort records newest first. Shared by implementations.
pub(crate) fn sort_newest_first(records: &mut [EssayRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
