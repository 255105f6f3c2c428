//! HTTP API Data Transfer Objects
//!
//! Request/response shapes for the public endpoints, plus the ad-hoc
//! `key:value,key:value` parameter mini-language. All of this is
//! presentation glue: the core only ever sees an already-parsed map.

use serde::Deserialize;
use std::collections::HashMap;

pub const ENDPOINT_SUBMIT_JOB: &str = "/jobs";
pub const ENDPOINT_JOB_STATUS: &str = "/jobs/:id";

/// Body of `POST /jobs`.
///
/// `url` is required but optional here so that its absence reaches the
/// handler's own 400 path instead of the extractor's generic rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitJobRequest {
    #[serde(default)]
    pub url: Option<String>,
    /// HTTP verb, case-insensitive. Defaults to `get`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Either a structured map or a `key:value,key:value` encoded string.
    #[serde(default)]
    pub params: Option<ParamSpec>,
}

fn default_method() -> String {
    "get".to_string()
}

/// The two accepted parameter encodings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ParamSpec {
    Map(HashMap<String, String>),
    Encoded(String),
}

impl ParamSpec {
    /// Normalizes either encoding into the map the core expects.
    pub fn into_map(self) -> HashMap<String, String> {
        match self {
            ParamSpec::Map(map) => map,
            ParamSpec::Encoded(s) => parse_param_string(&s),
        }
    }
}

/// Parses the ad-hoc `key:value,key:value` encoding.
///
/// Pairs are comma-separated; the first `:` splits key from value. Segments
/// with no `:`, or with an empty key, are dropped.
pub fn parse_param_string(input: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for segment in input.split(',') {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        params.insert(key.to_string(), value.trim().to_string());
    }

    params
}

/// Query parameters of `POST /jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitJobQuery {
    /// Acknowledgment rendering: `text` (default) or `html`.
    #[serde(default)]
    pub format: Option<String>,
}
