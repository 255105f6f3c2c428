use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a fetch job.
///
/// Wrapper around a monotonically increasing counter owned by the queue.
/// Ids are unique for the lifetime of the process and never reused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(JobId)
    }
}

/// HTTP verb a job is allowed to use.
///
/// Parsed case-insensitively; anything other than GET or POST is rejected
/// at the protocol layer before a job is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The definition of one fetch job: what to request and how.
///
/// Immutable after creation. For GET jobs the parameter map is carried but
/// not forwarded to the outbound request (see `worker::fetcher`); for POST
/// jobs it is sent as an URL-encoded form body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchJob {
    pub method: HttpMethod,
    pub url: String,
    pub params: HashMap<String, String>,
}

/// Lifecycle state of a queued job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobState {
    /// Submitted but not yet picked up by any worker.
    Queued,
    /// A worker has claimed the job and is executing the fetch.
    Running,
    /// The worker wrote a terminal outcome (or skipped a duplicate claim).
    Done,
}

/// The internal representation of a job held by the queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEntry {
    pub job: FetchJob,
    pub state: JobState,
    /// Timestamp (ms) when the job was submitted.
    pub created_at: u64,
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
