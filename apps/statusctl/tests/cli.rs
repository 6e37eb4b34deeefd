//! End-to-end tests for the statusctl binary.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_statusctl"));
    cmd.env_remove("RUST_LOG").env_remove("STATUSCTL_LOG_FORMAT");
    cmd
}

fn write_plan(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("plan.toml");
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

const FAILING_PLAN: &str = r#"
[[step]]
name = "open input"
code = "OK"

[[step]]
name = "parse header"
code = "CANCELLED"
message = "message"

[[step]]
name = "mux"
code = "UNIMPLEMENTED"
message = "other"
"#;

// =============================================================================
// RENDER
// =============================================================================

#[test]
fn render_ok() {
    cmd()
        .args(["render", "--code", "OK", "--message", "ignored"])
        .assert()
        .success()
        .stdout("OK\n");
}

#[test]
fn render_error() {
    cmd()
        .args(["render", "--code", "CANCELLED", "--message", "msg"])
        .assert()
        .success()
        .stdout("2:msg\n");
}

#[test]
fn render_json() {
    let out = cmd()
        .args(["--json", "render", "-c", "3", "-m", "bad flag"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["code"], "INVALID_ARGUMENT");
    assert_eq!(json["value"], 3);
    assert_eq!(json["rendered"], "3:bad flag");
}

#[test]
fn render_unknown_code_fails() {
    cmd()
        .args(["render", "--code", "BOGUS"])
        .assert()
        .code(1)
        .stderr(contains("BOGUS"));
}

// =============================================================================
// CHECK (fatal)
// =============================================================================

#[test]
fn check_ok_returns_normally() {
    cmd()
        .args(["check", "--code", "OK"])
        .assert()
        .success()
        .stdout("OK\n");
}

#[test]
fn check_failure_aborts_with_message() {
    cmd()
        .args(["check", "--code", "UNKNOWN", "--message", "Status Unknown"])
        .assert()
        .failure()
        .stderr(contains("Status Unknown"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_failure_includes_context() {
    cmd()
        .args([
            "check",
            "--code",
            "UNKNOWN",
            "--message",
            "Status Unknown",
            "--context",
            "Foo1234",
        ])
        .assert()
        .failure()
        .stderr(contains("Status Unknown").and(contains("Foo1234")));
}

#[test]
fn check_failure_reports_diagnostic_once() {
    let out = cmd()
        .args(["check", "--code", "CANCELLED", "--message", "stop"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&out);
    assert_eq!(stderr.matches("Check failed").count(), 1, "{}", stderr);
    assert!(stderr.contains("2:stop"));
}

// =============================================================================
// RUN
// =============================================================================

#[test]
fn run_reports_first_failure() {
    let dir = TempDir::new().unwrap();
    let plan = write_plan(&dir, FAILING_PLAN);

    cmd()
        .args(["run", "--plan", &plan])
        .assert()
        .code(2)
        .stdout(contains("2:message").and(contains("First failure: parse header")))
        .stdout(contains("4:other").not());
}

#[test]
fn run_json_output() {
    let dir = TempDir::new().unwrap();
    let plan = write_plan(&dir, FAILING_PLAN);

    let out = cmd()
        .args(["--json", "run", "--plan", &plan])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["status"]["rendered"], "2:message");
    assert_eq!(json["status"]["code"], "CANCELLED");
    assert_eq!(json["failed_step"], "parse header");
    assert_eq!(json["steps_run"], 3);
}

#[test]
fn run_all_ok_plan_succeeds() {
    let dir = TempDir::new().unwrap();
    let plan = write_plan(
        &dir,
        "[[step]]\nname = \"a\"\ncode = \"OK\"\n\n[[step]]\nname = \"b\"\ncode = \"0\"\n",
    );

    cmd()
        .args(["run", "--plan", &plan, "--fatal"])
        .assert()
        .success()
        .stdout("OK\n");
}

#[test]
fn run_fatal_aborts_with_step_context() {
    let dir = TempDir::new().unwrap();
    let plan = write_plan(&dir, FAILING_PLAN);

    cmd()
        .args(["run", "--plan", &plan, "--fatal"])
        .assert()
        .failure()
        .stderr(contains("2:message").and(contains("parse header")));
}

#[test]
fn run_missing_plan_is_tool_error() {
    cmd()
        .args(["run", "--plan", "/nonexistent/plan.toml"])
        .assert()
        .code(1)
        .stderr(contains("/nonexistent/plan.toml"));
}

#[test]
fn run_invalid_plan_is_tool_error() {
    let dir = TempDir::new().unwrap();
    let plan = write_plan(&dir, "[[step]]\nname = \"x\"\n");

    cmd()
        .args(["run", "--plan", &plan])
        .assert()
        .code(1)
        .stderr(contains("Invalid plan"));
}

// =============================================================================
// CODES
// =============================================================================

#[test]
fn codes_lists_all() {
    cmd()
        .arg("codes")
        .assert()
        .success()
        .stdout(contains("OK").and(contains("UNKNOWN")).and(contains("ALREADY_EXISTS")));
}

#[test]
fn codes_json() {
    let out = cmd()
        .args(["--json", "codes"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&out).unwrap();
    let codes = json.as_array().unwrap();
    assert_eq!(codes.len(), 19);
    assert_eq!(codes[0]["name"], "OK");
    assert_eq!(codes[2]["name"], "CANCELLED");
    assert_eq!(codes[2]["value"], 2);
}
