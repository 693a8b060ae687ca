use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration_arg};
use crate::error::AppResult;

/// On-disk mirror of the command line. Every field is optional; values given
/// on the command line win.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub task: Option<String>,
    pub url: Option<String>,
    #[serde(alias = "requests", alias = "num_queries")]
    pub total_requests: Option<u64>,
    pub concurrency: Option<usize>,
    #[serde(alias = "num_chunk", alias = "candidates")]
    pub candidates_per_request: Option<usize>,
    pub dataset: Option<String>,
    pub queries: Option<String>,
    pub max_new_tokens: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(secs) => parse_duration_arg(&secs.to_string()),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
