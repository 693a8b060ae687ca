use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_DATASET, DEFAULT_MAX_NEW_TOKENS};
use super::parsers::{parse_candidates, parse_concurrency, parse_duration_arg, parse_positive_u64};
use super::types::{OutputFormat, PositiveU64, PositiveUsize, TaskKind};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent load generator for rerank, embedding and generation inference endpoints.",
    next_help_heading = "Advanced Options"
)]
pub struct BenchArgs {
    /// Workload to send (rerank, embedding, llm)
    #[arg(
        long,
        short = 'k',
        default_value = "rerank",
        value_enum,
        ignore_case = true,
        help_heading = "Common Options"
    )]
    pub task: TaskKind,

    /// Target URL, e.g. http://localhost:8080/rerank
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// Total number of requests to send
    #[arg(
        long = "num-queries",
        short = 'n',
        alias = "requests",
        default_value = "1",
        value_parser = parse_positive_u64,
        help_heading = "Common Options"
    )]
    pub total_requests: PositiveU64,

    /// Number of concurrent workers (1, 2, 4, 8, 16, 32, 64)
    #[arg(
        long,
        short = 'c',
        default_value = "1",
        value_parser = parse_concurrency,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Candidate passages per rerank request (at most 4096)
    #[arg(
        long = "num-chunk",
        alias = "candidates",
        default_value = "1",
        value_parser = parse_candidates,
        help_heading = "Common Options"
    )]
    pub candidates_per_request: PositiveUsize,

    /// JSON array of text fragments used to build request payloads
    #[arg(long, short = 'd', default_value = DEFAULT_DATASET, help_heading = "Common Options")]
    pub dataset: String,

    /// JSON array of queries (strings or {"question": ...} objects); defaults to the dataset
    #[arg(long)]
    pub queries: Option<String>,

    /// Generation budget sent with llm requests
    #[arg(long = "max-new-tokens", default_value = DEFAULT_MAX_NEW_TOKENS, value_parser = parse_positive_u64)]
    pub max_new_tokens: PositiveU64,

    /// Per-request timeout (supports ms/s/m/h); unset waits indefinitely
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Report format printed after the run
    #[arg(long = "output-format", default_value = "text", value_enum)]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
