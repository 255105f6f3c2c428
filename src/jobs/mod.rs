//! Job Submission Module
//!
//! The submission boundary of the service. Jobs flow in through the HTTP
//! handlers, get validated and enqueued by the `Coordinator`, and sit in the
//! `JobQueue` until a worker claims them.
//!
//! ## Architecture Overview
//! 1. **Submission**: `POST /jobs` is parsed into a `FetchJob`; the queue
//!    assigns a fresh id and the id is returned before any fetch happens.
//! 2. **Ordering**: the queue delivers jobs to workers in submission order,
//!    each job to exactly one worker.
//! 3. **Lookup**: `GET /jobs/{id}` reads the result store through the
//!    coordinator; it never waits for an in-flight fetch.
//!
//! ## Submodules
//! - **`types`**: Job ids, verbs, and the queue's internal entry record.
//! - **`queue`**: FIFO queue with atomic id assignment and claim semantics.
//! - **`coordinator`**: The public submit/lookup API and its error taxonomy.
//! - **`protocol`**: HTTP DTOs and the ad-hoc parameter mini-language.
//! - **`handlers`**: axum handlers and response rendering.

pub mod coordinator;
pub mod handlers;
pub mod protocol;
pub mod queue;
pub mod types;
