use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::debug;

use crate::config::RunConfig;
use crate::dataset::Sampler;
use crate::error::AppResult;
use crate::metrics::OutcomeRecord;

use super::client::build_client;
use super::worker::Worker;

/// Everything a finished run produced, before aggregation.
#[derive(Debug)]
pub struct Dispatch {
    pub records: Vec<OutcomeRecord>,
    /// Wall clock from just before the first spawn to just after the last join.
    pub total_wall_time: Duration,
}

/// Splits `[0, total)` into `workers` contiguous blocks whose lengths differ
/// by at most one. Trailing blocks are empty when `workers > total`.
#[must_use]
pub fn partition(total: u64, workers: usize) -> Vec<Range<u64>> {
    let count = u64::try_from(workers).unwrap_or(u64::MAX);
    let Some(base) = total.checked_div(count) else {
        return Vec::new();
    };
    let extra = total.checked_rem(count).unwrap_or(0);

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0u64;
    for worker in 0..count {
        let len = if worker < extra {
            base.saturating_add(1)
        } else {
            base
        };
        let end = start.saturating_add(len);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Spawns `config.concurrency` workers, waits for all of them, and returns
/// every outcome record.
///
/// Clients are built before the first spawn, so a client failure starts no
/// worker. There is no pool-level deadline: without a request timeout a hung
/// request keeps its worker, and the run, waiting.
///
/// # Errors
///
/// Returns an error when a client cannot be built or a worker task panics.
pub async fn dispatch(config: &RunConfig, sampler: Arc<Sampler>) -> AppResult<Dispatch> {
    let total = config.total_requests.get();
    let ranges = partition(total, config.concurrency.get());

    let mut workers = Vec::with_capacity(ranges.len());
    for (id, indices) in ranges.into_iter().enumerate() {
        workers.push(Worker::new(
            id,
            build_client(config.request_timeout)?,
            config.target_url.clone(),
            config.request_builder(),
            Arc::clone(&sampler),
            indices,
        ));
    }

    let mut pool = JoinSet::new();
    let test_start = Instant::now();
    for worker in workers {
        pool.spawn(worker.run());
    }

    let mut records = Vec::with_capacity(usize::try_from(total).unwrap_or(0));
    while let Some(joined) = pool.join_next().await {
        records.extend(joined?);
    }
    let total_wall_time = test_start.elapsed();
    debug!(
        "Collected {} records in {:?}",
        records.len(),
        total_wall_time
    );

    Ok(Dispatch {
        records,
        total_wall_time,
    })
}
