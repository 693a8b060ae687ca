use std::time::Duration;

use crate::error::MetricsError;

use super::types::{Outcome, OutcomeRecord, RequestFailure, RunReport};

const PERCENTILE_P50: u64 = 50;
const PERCENTILE_P90: u64 = 90;
const PERCENTILE_P99: u64 = 99;
const PERCENT_DIVISOR: u128 = 100;
const NANOS_PER_SEC: u128 = 1_000_000_000;

fn from_nanos(nanos: u128) -> Duration {
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Linear interpolation between order statistics at rank `p * (n - 1) / 100`.
///
/// `sorted` must be in ascending order. Returns zero for an empty slice.
#[must_use]
pub fn percentile(sorted: &[Duration], p: u64) -> Duration {
    let Some(last) = sorted.len().checked_sub(1) else {
        return Duration::ZERO;
    };
    let scaled_rank = u128::from(p.min(100)).saturating_mul(last as u128);
    let lower_idx = usize::try_from(scaled_rank / PERCENT_DIVISOR).unwrap_or(last);
    let fraction = scaled_rank % PERCENT_DIVISOR;
    let upper_idx = lower_idx.saturating_add(1).min(last);

    let lower = sorted.get(lower_idx).map_or(0, Duration::as_nanos);
    let upper = sorted.get(upper_idx).map_or(lower, Duration::as_nanos);
    let step = upper
        .saturating_sub(lower)
        .saturating_mul(fraction)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0);
    from_nanos(lower.saturating_add(step))
}

/// Arithmetic mean. Returns zero for an empty slice.
#[must_use]
pub fn mean(latencies: &[Duration]) -> Duration {
    let total = latencies
        .iter()
        .fold(0u128, |acc, latency| acc.saturating_add(latency.as_nanos()));
    from_nanos(total.checked_div(latencies.len() as u128).unwrap_or(0))
}

fn throughput_x100(total_requests: u64, wall: Duration) -> u64 {
    let scaled = u128::from(total_requests)
        .saturating_mul(PERCENT_DIVISOR)
        .saturating_mul(NANOS_PER_SEC)
        .checked_div(wall.as_nanos())
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Reduces all outcome records of a run into a [`RunReport`].
///
/// Failed requests contribute a zero latency to the mean and percentiles
/// and are counted in `error_count`. This understates latency when errors
/// occur; the distribution is kept that way so reports stay comparable with
/// earlier runs.
///
/// # Errors
///
/// Returns [`MetricsError::EmptyResult`] when `records` is empty.
pub fn aggregate(
    records: &[OutcomeRecord],
    concurrency: usize,
    total_wall_time: Duration,
) -> Result<RunReport, MetricsError> {
    if records.is_empty() {
        return Err(MetricsError::EmptyResult);
    }

    let mut latencies: Vec<Duration> = Vec::with_capacity(records.len());
    let mut timeout_count = 0u64;
    let mut transport_error_count = 0u64;
    let mut status_error_count = 0u64;

    for record in records {
        latencies.push(record.latency());
        match record.outcome {
            Outcome::Succeeded { .. } => {}
            Outcome::Failed(RequestFailure::Timeout) => {
                timeout_count = timeout_count.saturating_add(1);
            }
            Outcome::Failed(RequestFailure::Transport) => {
                transport_error_count = transport_error_count.saturating_add(1);
            }
            Outcome::Failed(RequestFailure::Status(_)) => {
                status_error_count = status_error_count.saturating_add(1);
            }
        }
    }
    latencies.sort_unstable();

    let total_requests = u64::try_from(records.len()).unwrap_or(u64::MAX);
    let error_count = timeout_count
        .saturating_add(transport_error_count)
        .saturating_add(status_error_count);

    Ok(RunReport {
        concurrency,
        total_requests,
        total_wall_time,
        mean_latency: mean(&latencies),
        p50_latency: percentile(&latencies, PERCENTILE_P50),
        p90_latency: percentile(&latencies, PERCENTILE_P90),
        p99_latency: percentile(&latencies, PERCENTILE_P99),
        error_count,
        timeout_count,
        transport_error_count,
        status_error_count,
        throughput_qps_x100: throughput_x100(total_requests, total_wall_time),
    })
}
