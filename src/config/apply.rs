use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveU64, TaskKind, ensure_candidates, ensure_concurrency};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

/// Applies configuration values to CLI arguments.
///
/// # Errors
///
/// Returns an error when a config value is invalid: unknown task,
/// non-positive counts, unsupported concurrency, or a bad duration.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "task")
        && let Some(task) = config.task.as_deref()
    {
        args.task = task.parse::<TaskKind>()?;
    }

    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "total_requests")
        && let Some(total) = config.total_requests
    {
        args.total_requests = ensure_positive_u64(total, "total_requests")?;
    }

    if !is_cli(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = ensure_concurrency(concurrency).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "concurrency",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "candidates_per_request")
        && let Some(candidates) = config.candidates_per_request
    {
        args.candidates_per_request = ensure_candidates(candidates).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "candidates_per_request",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "dataset")
        && let Some(dataset) = config.dataset.clone()
    {
        args.dataset = dataset;
    }

    if !is_cli(matches, "queries")
        && let Some(queries) = config.queries.clone()
    {
        args.queries = Some(queries);
    }

    if !is_cli(matches, "max_new_tokens")
        && let Some(max_new_tokens) = config.max_new_tokens
    {
        args.max_new_tokens = ensure_positive_u64(max_new_tokens, "max_new_tokens")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = Some(timeout.to_duration()?);
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}
