//! Request execution: per-worker clients, the worker loop, and the fixed
//! worker pool that drives a run.
mod client;
mod dispatcher;
mod worker;


use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::dataset::Sampler;
use crate::error::{AppError, AppResult};
use crate::metrics::{RunReport, aggregate};

pub use client::build_client;
pub use dispatcher::{Dispatch, dispatch, partition};
pub use worker::{Worker, classify_error, classify_status};

/// Runs the whole benchmark and reduces the outcome records.
///
/// # Errors
///
/// Returns an error when a client cannot be built, a worker task panics,
/// or the run produced no records.
pub async fn run_benchmark(config: &RunConfig, sampler: Arc<Sampler>) -> AppResult<RunReport> {
    info!(
        "Starting {} run against {}: {} requests, concurrency {}",
        config.task.as_str(),
        config.target_url,
        config.total_requests.get(),
        config.concurrency.get()
    );
    let Dispatch {
        records,
        total_wall_time,
    } = dispatch(config, sampler).await?;

    let report = aggregate(&records, config.concurrency.get(), total_wall_time)
        .map_err(AppError::metrics)?;
    if report.error_count > 0 {
        warn!(
            "{} of {} requests failed",
            report.error_count, report.total_requests
        );
    }
    info!(
        "Run finished in {:?} with {} errors",
        report.total_wall_time, report.error_count
    );
    Ok(report)
}
