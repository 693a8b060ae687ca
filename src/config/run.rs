use std::time::Duration;

use url::Url;

use crate::args::{BenchArgs, MAX_CANDIDATES_PER_REQUEST, PositiveU64, PositiveUsize, TaskKind};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::workload::RequestBuilder;

const DEFAULT_MAX_NEW_TOKENS: u64 = 128;

/// Validated, read-only settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub task: TaskKind,
    pub target_url: Url,
    pub total_requests: PositiveU64,
    pub concurrency: PositiveUsize,
    pub candidates_per_request: PositiveUsize,
    pub max_new_tokens: PositiveU64,
    /// Per-request timeout. `None` lets a hung request block its worker.
    pub request_timeout: Option<Duration>,
}

fn positive_u64(value: u64, field: &'static str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value)
        .map_err(|_too_small| AppError::config(ConfigError::NonPositive { field }))
}

fn positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|_too_small| AppError::config(ConfigError::NonPositive { field }))
}

fn candidate_count(value: usize) -> AppResult<PositiveUsize> {
    if value > MAX_CANDIDATES_PER_REQUEST {
        return Err(AppError::config(ConfigError::TooLarge {
            field: "candidates_per_request",
            max: MAX_CANDIDATES_PER_REQUEST,
        }));
    }
    positive_usize(value, "candidates_per_request")
}

pub(crate) fn parse_target_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }
    Ok(url)
}

impl RunConfig {
    /// Builds a config from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] for a zero count,
    /// [`ConfigError::TooLarge`] for more than
    /// [`MAX_CANDIDATES_PER_REQUEST`] candidates, and a validation error for
    /// a malformed URL.
    pub fn new(
        task: TaskKind,
        target_url: &str,
        total_requests: u64,
        concurrency: usize,
        candidates_per_request: usize,
    ) -> AppResult<Self> {
        Ok(Self {
            task,
            target_url: parse_target_url(target_url)?,
            total_requests: positive_u64(total_requests, "total_requests")?,
            concurrency: positive_usize(concurrency, "concurrency")?,
            candidates_per_request: candidate_count(candidates_per_request)?,
            max_new_tokens: positive_u64(DEFAULT_MAX_NEW_TOKENS, "max_new_tokens")?,
            request_timeout: None,
        })
    }

    /// Builds a config from parsed (and config-file merged) CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is missing or malformed.
    pub fn from_args(args: &BenchArgs) -> AppResult<Self> {
        let raw_url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        Ok(Self {
            task: args.task,
            target_url: parse_target_url(raw_url)?,
            total_requests: args.total_requests,
            concurrency: args.concurrency,
            candidates_per_request: args.candidates_per_request,
            max_new_tokens: args.max_new_tokens,
            request_timeout: args.request_timeout,
        })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn request_builder(&self) -> RequestBuilder {
        RequestBuilder::new(
            self.task,
            self.candidates_per_request.get(),
            self.max_new_tokens.get(),
        )
    }
}
