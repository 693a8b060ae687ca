use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use servebench::args::{BenchArgs, DEFAULT_CONFIG_FILES};
use servebench::config::{RunConfig, apply_config, load_config};
use servebench::dataset::{Sampler, load_pool};
use servebench::error::{AppError, AppResult};
use servebench::http::run_benchmark;
use servebench::report::{ReportContext, print_report};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    let merged = merge_config(&mut args, &matches);
    crate::system::logger::init_logging(args.verbose, args.no_color);
    merged.inspect_err(log_error)?;

    execute(&args).inspect_err(log_error)
}

fn log_error(err: &AppError) {
    if err.is_configuration() {
        error!("Invalid configuration: {}", err);
    } else {
        error!("{}", err);
    }
}

fn parse_args() -> AppResult<Option<(BenchArgs, ArgMatches)>> {
    let mut cmd = BenchArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = BenchArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn merge_config(args: &mut BenchArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn load_sampler(args: &BenchArgs) -> AppResult<Sampler> {
    let passages = load_pool(Path::new(&args.dataset))?;
    let queries = match args.queries.as_deref() {
        Some(path) => load_pool(Path::new(path))?,
        None => passages.clone(),
    };
    Ok(Sampler::new(queries, passages))
}

/// Validates everything, then runs. No worker is spawned unless the config
/// and dataset are both usable.
fn execute(args: &BenchArgs) -> AppResult<()> {
    let config = RunConfig::from_args(args)?;
    let sampler = Arc::new(load_sampler(args)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let context = ReportContext {
        task: config.task,
        target_url: config.target_url.to_string(),
        started_at: Utc::now(),
    };
    let report = runtime.block_on(run_benchmark(&config, sampler))?;
    print_report(&report, &context, args.output_format)
}
