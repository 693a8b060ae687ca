use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the client owned by a single worker.
///
/// Environment proxies are ignored so the run measures the target directly.
/// Without a `timeout` a request waits as long as the server holds it.
///
/// # Errors
///
/// Returns [`HttpError::BuildClientFailed`] when the TLS backend or resolver
/// cannot be initialised.
pub fn build_client(timeout: Option<Duration>) -> AppResult<Client> {
    let mut builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .no_proxy()
        .pool_max_idle_per_host(1);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
