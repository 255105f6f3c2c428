//! In-memory result store backed by a concurrent map.

use super::types::Outcome;
use super::ResultStore;
use crate::jobs::types::JobId;

use dashmap::DashMap;
use std::sync::Arc;

/// `DashMap`-backed [`ResultStore`].
///
/// Writes for distinct ids never contend; reads see a completed write
/// immediately. Clones share the same underlying map, so the store can be
/// handed to the worker pool and the coordinator independently.
#[derive(Clone)]
pub struct MemoryResultStore {
    records: Arc<DashMap<JobId, Outcome>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Number of terminal records currently held.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl Default for MemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for MemoryResultStore {
    fn write(&self, id: JobId, outcome: Outcome) -> anyhow::Result<()> {
        self.records.insert(id, outcome);
        tracing::debug!("Stored outcome for job {}", id);
        Ok(())
    }

    fn read(&self, id: JobId) -> Option<Outcome> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }
}
