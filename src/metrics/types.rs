use std::time::Duration;

use tokio::time::Instant;

/// Why a single request did not succeed. Recorded, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFailure {
    /// Response arrived with a non-2xx status.
    Status(u16),
    /// The request exceeded the configured timeout.
    Timeout,
    /// Connection, TLS, or body error before a status was received.
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { status: u16 },
    Failed(RequestFailure),
}

/// Timing and result of one request attempt.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeRecord {
    pub index: u64,
    pub start: Instant,
    pub end: Instant,
    pub outcome: Outcome,
}

impl OutcomeRecord {
    #[must_use]
    pub const fn new(index: u64, start: Instant, end: Instant, outcome: Outcome) -> Self {
        Self {
            index,
            start,
            end,
            outcome,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded { .. })
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// Latency as it enters the distribution: failed requests count as zero.
    #[must_use]
    pub fn latency(&self) -> Duration {
        if self.succeeded() {
            self.elapsed()
        } else {
            Duration::ZERO
        }
    }
}

/// Summary of one complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub concurrency: usize,
    pub total_requests: u64,
    pub total_wall_time: Duration,
    pub mean_latency: Duration,
    pub p50_latency: Duration,
    pub p90_latency: Duration,
    pub p99_latency: Duration,
    pub error_count: u64,
    pub timeout_count: u64,
    pub transport_error_count: u64,
    pub status_error_count: u64,
    /// Requests per second of wall time, scaled by 100.
    pub throughput_qps_x100: u64,
}

impl RunReport {
    #[must_use]
    pub const fn success_count(&self) -> u64 {
        self.total_requests.saturating_sub(self.error_count)
    }
}
