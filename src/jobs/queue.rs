//! Job Queue
//!
//! FIFO queue of pending fetch jobs with exclusive id assignment.
//!
//! ## Responsibilities
//! - **Id assignment**: a queue-owned atomic counter hands out fresh ids at
//!   enqueue time; no global mutable state outside the queue.
//! - **Ordering**: jobs are claimed in submission order.
//! - **Claiming**: a job is handed to exactly one worker; the pop from the
//!   FIFO list and the `Queued -> Running` transition make concurrent
//!   double-claims impossible.
//!
//! Delivery is at-most-once: a claim that dies with its worker is not
//! redelivered. The worker additionally refuses to re-fetch any id that
//! already has a terminal outcome, so the two layers together honor the
//! at-most-one-execution intent.

use super::types::{now_ms, FetchJob, JobEntry, JobId, JobState};

use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Shared queue of fetch jobs.
pub struct JobQueue {
    /// All entries ever enqueued, keyed by id. Entries are retained after
    /// completion for status counting.
    entries: DashMap<JobId, JobEntry>,
    /// Ids awaiting a claim, oldest first.
    pending: Mutex<VecDeque<JobId>>,
    /// Source of fresh job ids.
    next_id: AtomicU64,
}

impl JobQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: DashMap::new(),
            pending: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Assigns a fresh id to the job and makes it visible to exactly one
    /// future claim. Returns immediately; execution happens later.
    pub fn enqueue(&self, job: FetchJob) -> JobId {
        let id = JobId(self.next_id.fetch_add(1, Ordering::SeqCst));

        self.entries.insert(
            id,
            JobEntry {
                job,
                state: JobState::Queued,
                created_at: now_ms(),
            },
        );

        self.pending
            .lock()
            .expect("pending queue lock poisoned")
            .push_back(id);

        tracing::debug!("Enqueued job {}", id);
        id
    }

    /// Pops the oldest queued job and transitions it to `Running`.
    ///
    /// Returns `None` when nothing is pending; workers sleep and poll again.
    /// An id whose entry is no longer `Queued` is dropped and the next one
    /// is tried.
    pub fn claim_next(&self) -> Option<(JobId, FetchJob)> {
        loop {
            let id = self
                .pending
                .lock()
                .expect("pending queue lock poisoned")
                .pop_front()?;

            if let Some(mut entry) = self.entries.get_mut(&id) {
                if entry.state != JobState::Queued {
                    continue;
                }
                entry.state = JobState::Running;
                tracing::debug!("Claimed job {}", id);
                return Some((id, entry.job.clone()));
            }
        }
    }

    /// Marks a claimed job as finished. Called after the terminal outcome
    /// has been written.
    pub fn mark_done(&self, id: JobId) {
        if let Some(mut entry) = self.entries.get_mut(&id) {
            entry.state = JobState::Done;
        }
    }

    /// Current lifecycle state of a job, if it was ever enqueued.
    pub fn job_state(&self, id: JobId) -> Option<JobState> {
        self.entries.get(&id).map(|entry| entry.state)
    }

    /// Counts of (queued, running, done) jobs, for the stats reporter.
    pub fn status_counts(&self) -> (usize, usize, usize) {
        let mut queued = 0;
        let mut running = 0;
        let mut done = 0;

        for entry in self.entries.iter() {
            match entry.state {
                JobState::Queued => queued += 1,
                JobState::Running => running += 1,
                JobState::Done => done += 1,
            }
        }

        (queued, running, done)
    }

    /// Total number of jobs ever enqueued.
    pub fn job_count(&self) -> usize {
        self.entries.len()
    }

    /// How long the oldest still-queued job has been waiting, in ms.
    /// `None` when nothing is queued. Reported by the stats loop.
    pub fn oldest_queued_age_ms(&self) -> Option<u64> {
        let front = *self
            .pending
            .lock()
            .expect("pending queue lock poisoned")
            .front()?;

        self.entries
            .get(&front)
            .map(|entry| now_ms().saturating_sub(entry.created_at))
    }
}
