//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! The status command fails open: with no backend reachable it renders the
//! zero snapshot and exits successfully.

use std::process::Command;

/// An address nothing listens on; the status path must absorb the failure.
const DEAD_SERVER: &str = "http://127.0.0.1:1";

fn run_poolwatch(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_poolwatch"))
        .args(args)
        .output()
        .expect("Failed to execute poolwatch")
}

#[test]
fn test_status_fails_open_with_dead_backend() {
    let output = run_poolwatch(&["status", "--server", DEAD_SERVER]);

    assert!(
        output.status.success(),
        "status should succeed against a dead backend, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Active Threads      0"), "stdout: {}", stdout);
    assert!(stdout.contains("Last updated:"), "stdout: {}", stdout);
}

#[test]
fn test_status_stdout_is_clean() {
    let output = run_poolwatch(&["status", "--server", DEAD_SERVER]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    // stdout should not contain JSON log lines
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
}

#[test]
fn test_status_json_output() {
    let output = run_poolwatch(&["status", "--json", "--server", DEAD_SERVER]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("status --json should emit valid JSON");

    assert_eq!(parsed["activeThreads"], 0);
    assert_eq!(parsed["queuedTasks"], 0);
    assert_eq!(parsed["utilization_percent"], 0.0);
    assert_eq!(parsed["utilization_tier"], "low");
}

#[test]
fn test_verbose_logs_fetch_failure_to_stderr() {
    let output = run_poolwatch(&["-v", "status", "--server", DEAD_SERVER]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("core.poller.fetch_failed"),
        "verbose stderr should log the fetch failure, got: {}",
        stderr
    );
}

#[test]
fn test_status_rejects_invalid_server_url() {
    let output = run_poolwatch(&["status", "--server", "not-a-url"]);
    assert!(
        !output.status.success(),
        "an invalid base URL should fail validation"
    );
}

#[test]
fn test_help_succeeds() {
    let output = run_poolwatch(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("files"));
}

#[test]
fn test_completions_generate() {
    let output = run_poolwatch(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}
