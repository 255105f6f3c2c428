//! Fetch Execution Module
//!
//! The worker pool that turns queued jobs into stored outcomes. Workers pull
//! from the `JobQueue`, fetch with a shared `reqwest` client under a bounded
//! timeout, and write exactly one terminal `Outcome` per job id. The stored
//! record is the worker's only externally observable completion signal; the
//! original submitter learns about it by polling.

pub mod fetcher;


pub use fetcher::{FetchWorker, WorkerConfig};
