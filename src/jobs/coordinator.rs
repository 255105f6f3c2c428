//! Job Coordinator
//!
//! The public submit/lookup boundary of the core. Submission validates the
//! request, enqueues the job, and returns the id before any fetch work has
//! started. Lookup reflects the result store's current state and never waits
//! for an in-flight fetch.

use super::queue::JobQueue;
use super::types::{FetchJob, HttpMethod, JobId};
use crate::store::{Outcome, ResultStore};

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Submission-time validation failures.
///
/// These are the only errors surfaced synchronously to the submitter; every
/// execution-time failure is absorbed by the worker and observed via lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// A POST job must carry at least one form parameter.
    #[error("a post request must include a params object")]
    MissingParams,

    /// The target URL is empty.
    #[error("url must not be empty")]
    EmptyUrl,
}

/// What a status lookup can observe for a job id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// No terminal record yet.
    Pending,
    Success { body: String, content_type: String },
    Error { status: Option<u16> },
}

/// Public entry point tying the queue and the result store together.
pub struct Coordinator<S: ResultStore> {
    queue: Arc<JobQueue>,
    store: S,
}

impl<S: ResultStore> Coordinator<S> {
    pub fn new(queue: Arc<JobQueue>, store: S) -> Arc<Self> {
        Arc::new(Self { queue, store })
    }

    /// Validates and enqueues a fetch job, returning its id.
    ///
    /// Returns before the fetch has started or finished; the caller polls
    /// [`Coordinator::lookup`] for the outcome.
    pub fn submit(
        &self,
        method: HttpMethod,
        url: &str,
        params: HashMap<String, String>,
    ) -> Result<JobId, SubmitError> {
        if url.trim().is_empty() {
            return Err(SubmitError::EmptyUrl);
        }
        if method == HttpMethod::Post && params.is_empty() {
            return Err(SubmitError::MissingParams);
        }

        let id = self.queue.enqueue(FetchJob {
            method,
            url: url.to_string(),
            params,
        });

        tracing::info!("Job {} submitted ({} {})", id, method, url);
        Ok(id)
    }

    /// Reads the current state of a job: what's there now, not what will be.
    pub fn lookup(&self, id: JobId) -> Lookup {
        match self.store.read(id) {
            Some(Outcome::Success { body, content_type }) => Lookup::Success { body, content_type },
            Some(Outcome::Error { status }) => Lookup::Error { status },
            None => Lookup::Pending,
        }
    }
}
