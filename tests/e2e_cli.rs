mod support;

use std::time::Duration;

use support::{run_servebench, run_servebench_in, spawn_http_server_or_skip, write_dataset};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn e2e_rerank_run_prints_summary_block() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip(200, Duration::ZERO)? else {
        return Ok(());
    };
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let dataset = write_dataset(dir.path(), 5)?;

    let output = run_servebench([
        "--task", "rerank", "--url", &url, "-n", "10", "-c", "2", "--num-chunk", "2", "-d",
        &dataset,
    ])?;

    if !output.status.success() {
        return Err(format!(
            "servebench failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = stdout_of(&output);
    for expected in [
        "Total Concurrency: 2",
        "Total Requests: 10",
        "Total error request is  0",
        "P99 total latency is  ",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("missing `{}` in output:\n{}", expected, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_json_output_is_parseable() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip(200, Duration::ZERO)? else {
        return Ok(());
    };
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let dataset = write_dataset(dir.path(), 3)?;

    let output = run_servebench([
        "--task", "embedding", "--url", &url, "-n", "4", "-c", "1", "-d", &dataset,
        "--output-format", "json",
    ])?;

    if !output.status.success() {
        return Err(format!(
            "servebench failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let value: serde_json::Value = serde_json::from_str(stdout_of(&output).trim())
        .map_err(|err| format!("stdout is not json: {}", err))?;
    if value.get("total_requests").and_then(serde_json::Value::as_u64) != Some(4) {
        return Err(format!("unexpected report: {}", value));
    }
    Ok(())
}

#[test]
fn e2e_failed_requests_still_exit_zero() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip(500, Duration::ZERO)? else {
        return Ok(());
    };
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let dataset = write_dataset(dir.path(), 3)?;

    let output = run_servebench([
        "--task", "rerank", "--url", &url, "-n", "4", "-c", "2", "-d", &dataset,
    ])?;

    if !output.status.success() {
        return Err(format!(
            "servebench failed: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Total error request is  4") {
        return Err(format!("expected four errors in output:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_zero_requests_is_rejected() -> Result<(), String> {
    let output = run_servebench(["--url", "http://127.0.0.1:9/rerank", "-n", "0"])?;
    if output.status.success() {
        return Err("expected non-zero exit for -n 0".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_unknown_task_is_rejected() -> Result<(), String> {
    let output = run_servebench(["--url", "http://127.0.0.1:9/rerank", "--task", "bogus"])?;
    if output.status.success() {
        return Err("expected non-zero exit for unknown task".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_empty_dataset_is_rejected() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let dataset = write_dataset(dir.path(), 0)?;

    let output = run_servebench([
        "--url", "http://127.0.0.1:9/rerank", "-n", "2", "-c", "1", "-d", &dataset,
    ])?;
    if output.status.success() {
        return Err("expected non-zero exit for empty dataset".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_bare_invocation_prints_help() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let no_args: [&str; 0] = [];

    let output = run_servebench_in(dir.path(), no_args)?;
    if !output.status.success() {
        return Err("expected bare invocation to exit zero".to_owned());
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Usage:") || stdout.contains("Total Requests") {
        return Err(format!("expected help text only:\n{}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_missing_url_is_rejected() -> Result<(), String> {
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_servebench_in(dir.path(), ["-n", "2"])?;
    if output.status.success() {
        return Err("expected non-zero exit without --url".to_owned());
    }
    Ok(())
}
