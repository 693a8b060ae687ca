use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{BenchArgs, PositiveU64, PositiveUsize, parse_duration_arg};
use crate::config::apply_config;
use crate::config::types::ConfigFile;
use crate::dataset::parse_fragments;
use crate::error::AppResult;
use crate::http::partition;
use crate::metrics::percentile;

thread_local! {
    static BASE_MATCHES: ArgMatches = BenchArgs::command().get_matches_from(["servebench"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Parses TOML config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<()> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config and applies it to defaults.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<()> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Parses dataset content into fragments.
///
/// # Errors
///
/// Returns an error when the content is not a dataset array.
pub fn parse_dataset_input(input: &str) -> AppResult<Vec<String>> {
    Ok(parse_fragments(input)?)
}

/// Parses a positive u64 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u64_input(input: &str) -> AppResult<u64> {
    let value: PositiveU64 = input.parse()?;
    Ok(value.get())
}

/// Parses a positive usize string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_usize_input(input: &str) -> AppResult<usize> {
    let value: PositiveUsize = input.parse()?;
    Ok(value.get())
}

/// Percentile over unsorted latencies given in nanoseconds.
#[must_use]
pub fn percentile_input(nanos: &[u64], pct: u64) -> Duration {
    let mut samples: Vec<Duration> = nanos.iter().copied().map(Duration::from_nanos).collect();
    samples.sort_unstable();
    percentile(&samples, pct)
}

/// Worker block lengths for a run of `total` requests.
#[must_use]
pub fn partition_lengths(total: u64, workers: usize) -> Vec<u64> {
    partition(total, workers)
        .into_iter()
        .map(|range| range.end.saturating_sub(range.start))
        .collect()
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<()> {
    BASE_MATCHES.with(|matches| {
        let mut args = BenchArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)
    })
}
