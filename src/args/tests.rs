use std::time::Duration;

use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult};

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["servebench", "-u", "http://localhost:8080/rerank"])?;

    if args.task != TaskKind::Rerank {
        return Err(AppError::validation("Expected default task rerank"));
    }
    if args.total_requests.get() != 1 {
        return Err(AppError::validation("Expected default total_requests 1"));
    }
    if args.concurrency.get() != 1 {
        return Err(AppError::validation("Expected default concurrency 1"));
    }
    if args.candidates_per_request.get() != 1 {
        return Err(AppError::validation("Expected default candidates 1"));
    }
    if args.dataset != "token_len_500.json" {
        return Err(AppError::validation(format!(
            "Unexpected dataset default: {}",
            args.dataset
        )));
    }
    if args.max_new_tokens.get() != 128 {
        return Err(AppError::validation("Expected default max_new_tokens 128"));
    }
    if args.request_timeout.is_some() {
        return Err(AppError::validation("Expected no default timeout"));
    }
    if args.output_format != OutputFormat::Text {
        return Err(AppError::validation("Expected text output"));
    }
    Ok(())
}

#[test]
fn parse_args_legacy_task_names() -> AppResult<()> {
    let rerank = parse_test_args(["servebench", "-u", "http://x", "--task", "tei_rerank"])?;
    if rerank.task != TaskKind::Rerank {
        return Err(AppError::validation("Expected tei_rerank alias"));
    }
    let embedding = parse_test_args(["servebench", "-u", "http://x", "-k", "mosec_embedding"])?;
    if embedding.task != TaskKind::Embedding {
        return Err(AppError::validation("Expected mosec_embedding alias"));
    }
    let llm = parse_test_args(["servebench", "-u", "http://x", "-k", "LLM"])?;
    if llm.task != TaskKind::Llm {
        return Err(AppError::validation("Expected case-insensitive llm"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_unknown_task() -> AppResult<()> {
    if parse_test_args(["servebench", "-u", "http://x", "--task", "classify"]).is_ok() {
        return Err(AppError::validation("Expected unknown task to fail"));
    }
    Ok(())
}

#[test]
fn task_kind_from_str_reports_unsupported_task() -> AppResult<()> {
    match "classify".parse::<TaskKind>() {
        Err(AppError::Validation(crate::error::ValidationError::UnsupportedTask { value })) => {
            if value != "classify" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected UnsupportedTask")),
    }
}

#[test]
fn parse_args_counts_and_aliases() -> AppResult<()> {
    let args = parse_test_args([
        "servebench",
        "-u",
        "http://x",
        "--requests",
        "250",
        "-c",
        "16",
        "--candidates",
        "4",
        "--timeout",
        "1500ms",
        "--output-format",
        "json",
    ])?;
    if args.total_requests.get() != 250 {
        return Err(AppError::validation("Unexpected total_requests"));
    }
    if args.concurrency.get() != 16 {
        return Err(AppError::validation("Unexpected concurrency"));
    }
    if args.candidates_per_request.get() != 4 {
        return Err(AppError::validation("Unexpected candidates"));
    }
    if args.request_timeout != Some(Duration::from_millis(1500)) {
        return Err(AppError::validation("Unexpected timeout"));
    }
    if args.output_format != OutputFormat::Json {
        return Err(AppError::validation("Expected json output"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_non_positive_counts() -> AppResult<()> {
    for flag in ["--num-queries", "--concurrency", "--num-chunk", "--max-new-tokens"] {
        if parse_test_args(["servebench", "-u", "http://x", flag, "0"]).is_ok() {
            return Err(AppError::validation(format!("Expected {} 0 to fail", flag)));
        }
    }
    Ok(())
}

#[test]
fn parse_args_caps_candidates_per_request() -> AppResult<()> {
    let limit = MAX_CANDIDATES_PER_REQUEST.to_string();
    let args = parse_test_args(["servebench", "-u", "http://x", "--num-chunk", limit.as_str()])?;
    if args.candidates_per_request.get() != MAX_CANDIDATES_PER_REQUEST {
        return Err(AppError::validation("Expected the limit itself to be accepted"));
    }

    let over = MAX_CANDIDATES_PER_REQUEST.saturating_add(1).to_string();
    if parse_test_args(["servebench", "-u", "http://x", "--num-chunk", over.as_str()]).is_ok() {
        return Err(AppError::validation("Expected candidates above the limit to fail"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_concurrency_outside_levels() -> AppResult<()> {
    for value in ["3", "12", "128"] {
        if parse_test_args(["servebench", "-u", "http://x", "-c", value]).is_ok() {
            return Err(AppError::validation(format!(
                "Expected concurrency {} to fail",
                value
            )));
        }
    }
    for value in CONCURRENCY_LEVELS {
        let text = value.to_string();
        let args = parse_test_args(["servebench", "-u", "http://x", "-c", text.as_str()])?;
        if args.concurrency.get() != value {
            return Err(AppError::validation("Unexpected concurrency"));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!("Unexpected duration for {}", input)));
        }
    }
    for input in ["", "ms", "0s", "5d"] {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!("Expected '{}' to fail", input)));
        }
    }
    Ok(())
}
