//! Outcome Data Types
//!
//! Defines the terminal record written for every executed job, plus the
//! content-type fallback used when the upstream response carries no
//! `Content-Type` header.

use serde::{Deserialize, Serialize};

/// The terminal result of one fetch job.
///
/// Exactly one variant is stored per finished job id. A pending job has no
/// record at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    /// The fetch succeeded. The body may be empty.
    Success {
        body: String,
        content_type: String,
    },
    /// The fetch failed.
    ///
    /// `status` carries the upstream status code when a response was
    /// received; `None` means no response was obtained at all (connect
    /// error, DNS failure, timeout).
    Error { status: Option<u16> },
}

impl Outcome {
    /// Transport-failure error record (no response received).
    pub fn transport_error() -> Self {
        Outcome::Error { status: None }
    }

    /// Upstream-error record carrying the received status code.
    pub fn upstream_error(status: u16) -> Self {
        Outcome::Error {
            status: Some(status),
        }
    }
}

/// Picks a content type for a response body when the upstream sent no
/// `Content-Type` header.
///
/// HTML documents are recognized by their doctype declaration; everything
/// else is served as plain text.
pub fn sniff_content_type(body: &str) -> &'static str {
    let head = body.get(..256).unwrap_or(body);
    if head.to_ascii_lowercase().contains("<!doctype") {
        "text/html"
    } else {
        "text/plain; charset=utf-8"
    }
}
