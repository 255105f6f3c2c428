//! Fetch Worker Pool
//!
//! Spawns background workers that claim jobs from the queue, perform the
//! outbound HTTP request, classify the response, and write the terminal
//! outcome to the result store.
//!
//! ## Responsibilities
//! - **Polling**: each worker loops on `claim_next`, sleeping briefly when
//!   the queue is empty.
//! - **Execution**: one bounded outbound request per claimed job. GET jobs
//!   do not forward their parameter map (preserved source behavior); POST
//!   jobs send it as an URL-encoded form body.
//! - **Absorption**: every execution-time failure becomes a stored `Error`
//!   outcome. Nothing propagates back to the queue or the submitter.

use crate::jobs::queue::JobQueue;
use crate::jobs::types::{FetchJob, HttpMethod, JobId};
use crate::store::types::sniff_content_type;
use crate::store::{Outcome, ResultStore};

use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;

/// Deployment-time knobs for the worker pool.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Number of concurrent workers.
    pub workers: usize,
    /// How long an idle worker sleeps before polling the queue again.
    pub poll_interval: Duration,
    /// Upper bound on the outbound fetch; a timeout is classified as a
    /// transport failure.
    pub fetch_timeout: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            poll_interval: Duration::from_millis(100),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

/// The engine that drives job execution.
pub struct FetchWorker<S: ResultStore> {
    queue: Arc<JobQueue>,
    store: S,
    client: reqwest::Client,
    config: WorkerConfig,
}

impl<S: ResultStore> FetchWorker<S> {
    pub fn new(queue: Arc<JobQueue>, store: S, config: WorkerConfig) -> Arc<Self> {
        Arc::new(Self {
            queue,
            store,
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Spawns the worker loops and returns immediately.
    pub fn start(self: Arc<Self>) {
        tracing::info!("Starting {} fetch workers", self.config.workers);

        for worker_id in 0..self.config.workers {
            let worker = self.clone();
            tokio::spawn(async move {
                worker.worker_loop(worker_id).await;
            });
        }
    }

    async fn worker_loop(&self, worker_id: usize) {
        tracing::info!("Worker {} started", worker_id);

        loop {
            match self.queue.claim_next() {
                Some((id, job)) => {
                    tracing::info!("Worker {} claimed job {} ({} {})", worker_id, id, job.method, job.url);
                    self.run_job(id, job).await;
                }
                None => {
                    tokio::time::sleep(self.config.poll_interval).await;
                }
            }
        }
    }

    /// Executes one claimed job and records its outcome.
    ///
    /// A job whose id already has a terminal record is not fetched again:
    /// the existing record stands, per the write-once contract.
    async fn run_job(&self, id: JobId, job: FetchJob) {
        if self.store.has_record(id) {
            tracing::debug!("Job {} already has a terminal outcome, skipping fetch", id);
            self.queue.mark_done(id);
            return;
        }

        let outcome = self.execute(&job).await;

        if let Err(e) = self.store.write(id, outcome) {
            tracing::error!("Failed to store outcome for job {}: {}", id, e);
            // Best-effort error record; if this also fails the job stays
            // observable as pending.
            if let Err(e) = self.store.write(id, Outcome::transport_error()) {
                tracing::error!("Failed to store fallback error for job {}: {}", id, e);
            }
        }

        self.queue.mark_done(id);
    }

    /// Performs the outbound request and classifies the result.
    async fn execute(&self, job: &FetchJob) -> Outcome {
        let request = match job.method {
            // Params are intentionally not forwarded as a query string.
            HttpMethod::Get => self.client.get(&job.url),
            HttpMethod::Post => self.client.post(&job.url).form(&job.params),
        };

        let response = match request.timeout(self.config.fetch_timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Fetch of {} got no response: {}", job.url, e);
                return Outcome::transport_error();
            }
        };

        let status = response.status().as_u16();
        if !is_success_status(job.method, status) {
            tracing::debug!("Fetch of {} returned status {}", job.url, status);
            return Outcome::upstream_error(status);
        }

        let header_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Fetch of {} failed while reading the body: {}", job.url, e);
                return Outcome::transport_error();
            }
        };

        let content_type =
            header_content_type.unwrap_or_else(|| sniff_content_type(&body).to_string());

        Outcome::Success { body, content_type }
    }
}

/// Whether a received status counts as success for the given verb.
///
/// GET accepts only 200; POST also accepts 201.
pub fn is_success_status(method: HttpMethod, status: u16) -> bool {
    match method {
        HttpMethod::Get => status == 200,
        HttpMethod::Post => status == 200 || status == 201,
    }
}
