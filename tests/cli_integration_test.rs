//! Command-line behavior of the `shipgate` binary.

mod common;

use assert_cmd::Command;
use common::fixture_path;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn shipgate() -> Command {
    let mut cmd = Command::cargo_bin("shipgate").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SHIPGATE_COLOR");
    cmd
}

#[test]
fn test_evaluate_clean_audit_json_to_stdout() {
    let output = shipgate()
        .args(["evaluate", "--format", "json", "--date", "2025-06-02"])
        .arg(fixture_path("clean_audit.json"))
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["goNoGoRecommendation"]["recommendation"], "GO");
    assert_eq!(json["concurrentUserAssessment"]["estimatedUsers"], 200);
    assert_eq!(json["concurrentUserAssessment"]["source"], "REPORTED_TEXT");
    assert_eq!(json["recommendedDeploymentDate"], "2025-06-02");
    assert_eq!(json["totalIssuesAnalyzed"], 0);
}

#[test]
fn test_evaluate_blocked_audit_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports/verdict.json");

    shipgate()
        .args(["evaluate", "--format", "json", "--date", "2025-06-02", "--output"])
        .arg(&output_path)
        .arg(fixture_path("blocked_audit.json"))
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json["goNoGoRecommendation"]["recommendation"], "NO_GO");
    assert_eq!(json["goNoGoRecommendation"]["ruleApplied"], "deployment_blockers");
    // The repeated SQL finding counts once; the failed phase adds a second blocker.
    assert_eq!(json["totalIssuesAnalyzed"], 2);
    assert_eq!(json["deploymentBlockersCount"], 2);
    assert_eq!(json["recommendedDeploymentDate"], "2025-06-13");

    let ids: Vec<&str> = json["classifiedIssues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["sec-sql-1", "phase-failure-performance-analysis"]);
}

#[test]
fn test_fail_on_no_go_sets_exit_status() {
    shipgate()
        .args(["evaluate", "--format", "json", "--fail-on-no-go"])
        .arg(fixture_path("blocked_audit.json"))
        .assert()
        .code(2);

    shipgate()
        .args(["evaluate", "--format", "json", "--fail-on-no-go"])
        .arg(fixture_path("clean_audit.json"))
        .assert()
        .success();
}

#[test]
fn test_markdown_report() {
    let output = shipgate()
        .args(["evaluate", "--format", "markdown", "--date", "2025-06-02"])
        .arg(fixture_path("blocked_audit.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("# Production Readiness: NO_GO"));
    assert!(stdout.contains("sec-sql-1"));
}

#[test]
fn test_terminal_report_mentions_rule() {
    let output = shipgate()
        .args(["evaluate", "--plain", "--date", "2025-06-02"])
        .arg(fixture_path("blocked_audit.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Recommendation: NO_GO (rule: deployment_blockers)"));
}

#[test]
fn test_color_always_overrides_no_color() {
    let output = shipgate()
        .args(["evaluate", "--color", "always", "--date", "2025-06-02"])
        .arg(fixture_path("blocked_audit.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\u{1b}["), "expected ANSI escapes in: {stdout}");
}

#[test]
fn test_capacity_flag_overrides_findings() {
    let output = shipgate()
        .args(["evaluate", "--format", "json", "--capacity", "90"])
        .arg(fixture_path("clean_audit.json"))
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["concurrentUserAssessment"]["source"], "CONFIGURED");
    assert_eq!(json["goNoGoRecommendation"]["recommendation"], "NO_GO");
}

#[test]
fn test_malformed_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.json");
    fs::write(&input, "{ \"phases\": [ { \"phaseName\": \"NOT_A_PHASE\" } ] }").unwrap();

    let output = shipgate().args(["evaluate"]).arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("Hint:"), "stderr: {stderr}");
}

#[test]
fn test_usage_errors_exit_one_not_blocked_status() {
    shipgate()
        .args(["evaluate", "--date", "06/02/2025"])
        .arg(fixture_path("clean_audit.json"))
        .assert()
        .code(1);

    shipgate().args(["evaluate", "--no-such-flag"]).assert().code(1);
}

#[test]
fn test_help_and_version_succeed() {
    let output = shipgate().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("evaluate"));

    shipgate().arg("--version").assert().success();
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    shipgate()
        .args(["evaluate"])
        .arg(temp_dir.path().join("absent.json"))
        .assert()
        .code(1);
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    shipgate()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    let config = fs::read_to_string(temp_dir.path().join(".shipgate.toml")).unwrap();
    assert!(config.contains("[capacity]"));

    shipgate()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();

    shipgate()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
