//! Public HTTP Handlers
//!
//! Thin presentation layer over the coordinator: parse the request, call
//! `submit`/`lookup`, render the result. Rendering rules:
//!
//! - Submission ack: plain text by default, markup with `?format=html`.
//! - Pending: `202 Accepted` with a "not yet complete" message.
//! - Success: `200 OK` with the stored body under the stored content type.
//! - Error: `502 Bad Gateway` with a message naming the upstream status
//!   when one was recorded.

use super::coordinator::{Coordinator, Lookup};
use super::protocol::{SubmitJobQuery, SubmitJobRequest};
use super::types::{HttpMethod, JobId};
use crate::store::ResultStore;

use axum::extract::{Path, Query};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_submit_job<S: ResultStore>(
    Extension(coordinator): Extension<Arc<Coordinator<S>>>,
    Query(query): Query<SubmitJobQuery>,
    Json(req): Json<SubmitJobRequest>,
) -> Response {
    let Some(method) = HttpMethod::parse(&req.method) else {
        tracing::debug!("Rejected submission with unknown verb {:?}", req.method);
        return plain(
            StatusCode::BAD_REQUEST,
            format!("Unsupported method '{}': use get or post.", req.method),
        );
    };

    let Some(url) = req.url else {
        tracing::debug!("Rejected submission without a url");
        return plain(
            StatusCode::BAD_REQUEST,
            "A submission must include a url.".to_string(),
        );
    };

    let params = req.params.map(|spec| spec.into_map()).unwrap_or_default();

    match coordinator.submit(method, &url, params) {
        Ok(id) => render_ack(id, query.format.as_deref()),
        Err(e) => {
            tracing::debug!("Rejected submission: {}", e);
            plain(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

pub async fn handle_job_status<S: ResultStore>(
    Extension(coordinator): Extension<Arc<Coordinator<S>>>,
    Path(id_str): Path<String>,
) -> Response {
    let Ok(id) = id_str.parse::<JobId>() else {
        return plain(
            StatusCode::BAD_REQUEST,
            format!("'{}' is not a valid job id.", id_str),
        );
    };

    match coordinator.lookup(id) {
        Lookup::Pending => plain(
            StatusCode::ACCEPTED,
            format!("Job {} is not yet complete.", id),
        ),
        Lookup::Success { body, content_type } => {
            let value = HeaderValue::from_str(&content_type)
                .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
            ([(header::CONTENT_TYPE, value)], body).into_response()
        }
        Lookup::Error {
            status: Some(status),
        } => plain(
            StatusCode::BAD_GATEWAY,
            format!("Job {} failed: upstream returned status {}.", id, status),
        ),
        Lookup::Error { status: None } => plain(
            StatusCode::BAD_GATEWAY,
            format!("Job {} failed: no response from upstream.", id),
        ),
    }
}

/// Renders the "job accepted" acknowledgment in the requested format.
fn render_ack(id: JobId, format: Option<&str>) -> Response {
    match format {
        Some("html") => (
            [(header::CONTENT_TYPE, HeaderValue::from_static("text/html"))],
            format!(
                "<p>Job <strong>#{}</strong> has been queued. \
                 Poll <code>GET /jobs/{}</code> for the result.</p>",
                id, id
            ),
        )
            .into_response(),
        _ => plain(
            StatusCode::OK,
            format!(
                "Job #{} has been queued. Poll GET /jobs/{} for the result.",
                id, id
            ),
        ),
    }
}

fn plain(status: StatusCode, body: String) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        body,
    )
        .into_response()
}
