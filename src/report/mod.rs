//! Run report rendering.
//!
//! The text form keeps the block layout that existing log parsers scan
//! for: two separator lines followed by the concurrency, request count,
//! wall time, latency, and error lines, all in seconds.
mod format;


use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::args::{OutputFormat, TaskKind};
use crate::error::AppResult;
use crate::metrics::RunReport;

pub use format::{format_secs, format_x100};

const SEPARATOR: &str = "=======================";

/// Run metadata printed alongside the statistics.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub task: TaskKind,
    pub target_url: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ReportJson<'ctx> {
    task: &'static str,
    url: &'ctx str,
    started_at: String,
    concurrency: usize,
    total_requests: u64,
    total_wall_time_us: u128,
    mean_latency_us: u128,
    p50_latency_us: u128,
    p90_latency_us: u128,
    p99_latency_us: u128,
    error_count: u64,
    timeout_count: u64,
    transport_error_count: u64,
    status_error_count: u64,
    success_count: u64,
    throughput_qps_x100: u64,
}

#[must_use]
pub fn report_lines(report: &RunReport, context: &ReportContext) -> Vec<String> {
    vec![
        format!("Task: {}", context.task.as_str()),
        format!("URL: {}", context.target_url),
        format!(
            "Started: {}",
            context.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        SEPARATOR.to_owned(),
        SEPARATOR.to_owned(),
        format!("Total Concurrency: {}", report.concurrency),
        format!("Total Requests: {}", report.total_requests),
        format!("Total Test time: {}", format_secs(report.total_wall_time)),
        format!(
            "avg total latency is  {} s",
            format_secs(report.mean_latency)
        ),
        format!("P50 total latency is  {} s", format_secs(report.p50_latency)),
        format!("P90 total latency is  {} s", format_secs(report.p90_latency)),
        format!("P99 total latency is  {} s", format_secs(report.p99_latency)),
        format!("Total error request is  {}", report.error_count),
        format!("Timeouts: {}", report.timeout_count),
        format!("Transport Errors: {}", report.transport_error_count),
        format!("Non-2xx Status: {}", report.status_error_count),
        format!("Successful: {}", report.success_count()),
        format!("QPS: {}", format_x100(report.throughput_qps_x100)),
    ]
}

/// Renders the report as a pretty-printed JSON object. Durations are in
/// microseconds.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn report_json(report: &RunReport, context: &ReportContext) -> AppResult<String> {
    let payload = ReportJson {
        task: context.task.as_str(),
        url: &context.target_url,
        started_at: context
            .started_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        concurrency: report.concurrency,
        total_requests: report.total_requests,
        total_wall_time_us: report.total_wall_time.as_micros(),
        mean_latency_us: report.mean_latency.as_micros(),
        p50_latency_us: report.p50_latency.as_micros(),
        p90_latency_us: report.p90_latency.as_micros(),
        p99_latency_us: report.p99_latency.as_micros(),
        error_count: report.error_count,
        timeout_count: report.timeout_count,
        transport_error_count: report.transport_error_count,
        status_error_count: report.status_error_count,
        success_count: report.success_count(),
        throughput_qps_x100: report.throughput_qps_x100,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Prints the report to stdout.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn print_report(
    report: &RunReport,
    context: &ReportContext,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in report_lines(report, context) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", report_json(report, context)?),
    }
    Ok(())
}
