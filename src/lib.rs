//! Asynchronous HTTP Fetch Job Service
//!
//! This library crate defines the core modules behind the `fetchd` binary.
//! A caller submits an HTTP fetch (method, URL, parameters), gets back a job
//! id immediately, and polls later for the outcome.
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`jobs`**: The submission boundary. Owns the FIFO job queue (with
//!   atomic id assignment), the `Coordinator` submit/lookup API, and the
//!   HTTP presentation layer (request DTOs, parameter parsing, handlers).
//! - **`worker`**: The execution engine. A pool of background workers claims
//!   queued jobs, performs the outbound HTTP fetch, classifies the response,
//!   and writes the terminal outcome.
//! - **`store`**: The result layer. A concurrent key-value store mapping job
//!   ids to terminal outcomes; absence of a record means the job is pending.

pub mod jobs;
pub mod store;
pub mod worker;
