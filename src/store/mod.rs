//! Result Store Module
//!
//! Maps job ids to terminal outcomes. The store is the only state shared
//! between the submission path, the worker pool, and status lookups.
//!
//! ## Core Concepts
//! - **Pending is absence**: a job with no record is still in flight. The
//!   store never holds a "pending" value.
//! - **Terminal records**: a record is written once by the worker that
//!   executed the job and is never mutated afterwards. An empty successful
//!   body is a valid record, distinct from absence.
//! - **Visibility**: a completed write is immediately visible to subsequent
//!   reads; reads for other ids proceed concurrently with writes.

pub mod memory;
pub mod types;


pub use memory::MemoryResultStore;
pub use types::Outcome;

use crate::jobs::types::JobId;

/// Read/write contract for outcome storage.
///
/// The backing mechanism is an implementation detail; callers only rely on
/// upsert writes and immediately visible reads. `write` is fallible so that
/// durable backends can surface infrastructure failures to the worker.
pub trait ResultStore: Send + Sync + 'static {
    /// Upsert the outcome for a job. Last write wins if ever called twice,
    /// though the worker guards against re-processing a finished job.
    fn write(&self, id: JobId, outcome: Outcome) -> anyhow::Result<()>;

    /// Read the current outcome for a job. `None` means the job is pending.
    fn read(&self, id: JobId) -> Option<Outcome>;

    /// Whether a terminal record exists for the id.
    fn has_record(&self, id: JobId) -> bool {
        self.read(id).is_some()
    }
}
