mod common;

use common::*;
use std::process::Command;

fn cli_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pipeline-status"))
}

#[test]
fn test_cli_help() {
    let output = cli_command().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("encode"));
    assert!(stdout.contains("decode"));
}

#[test]
fn test_cli_encode_decode() {
    let output = cli_command()
        .args(["encode", "Job is running... ", "--base-sha", FAKE_SHA])
        .output()
        .unwrap();
    assert!(output.status.success());
    let encoded = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    assert_eq!(encoded, format!("Job is running... BaseSHA:{}", FAKE_SHA));

    let output = cli_command().args(["decode", encoded.as_str()]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), FAKE_SHA);
}

#[test]
fn test_cli_decode_without_sha() {
    let output = cli_command()
        .args(["decode", "Job is running..."])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_encode_with_backend_budget() {
    let dir = create_test_dir();
    write_status_config(dir.path(), "backends:\n  short:\n    max_length: 60\n");
    let long = "z".repeat(100);

    let output = cli_command()
        .args([
            "encode",
            long.as_str(),
            "--base-sha",
            FAKE_SHA,
            "--backend",
            "short",
            "--config",
            dir.path().join("status.yaml").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let encoded = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    assert_eq!(encoded.chars().count(), 60);
}

#[test]
fn test_cli_resolve() {
    let dir = create_test_dir();
    write_file(
        dir.path(),
        "snapshot.yaml",
        &snapshot_yaml(&[task_run("pr-1-build", "build", &["True"])], &[]),
    );
    write_file(dir.path(), "jobs.yaml", &jobs_yaml(&["build", "test"], &[]));

    let output = cli_command()
        .args([
            "resolve",
            dir.path().join("snapshot.yaml").to_str().unwrap(),
            "--jobs",
            dir.path().join("jobs.yaml").to_str().unwrap(),
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["state"], "pending");
    assert_eq!(json["jobs"][0]["state"], "success");
    assert_eq!(json["jobs"][1]["state"], "pending");
}

#[test]
fn test_cli_resolve_failure_exit_code() {
    let dir = create_test_dir();
    write_file(
        dir.path(),
        "snapshot.yaml",
        &snapshot_yaml(&[], &[run("pr-1-release", "release", &["False"])]),
    );
    write_file(dir.path(), "jobs.yaml", &jobs_yaml(&[], &["release"]));

    let output = cli_command()
        .args([
            "resolve",
            dir.path().join("snapshot.yaml").to_str().unwrap(),
            "--jobs",
            dir.path().join("jobs.yaml").to_str().unwrap(),
            "--kind",
            "post-submit",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("release [failure]"));
}

#[test]
fn test_cli_resolve_missing_snapshot() {
    let dir = create_test_dir();
    write_file(dir.path(), "jobs.yaml", &jobs_yaml(&["build"], &[]));

    let output = cli_command()
        .args([
            "resolve",
            dir.path().join("absent.yaml").to_str().unwrap(),
            "--jobs",
            dir.path().join("jobs.yaml").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_resolve_rejects_duplicate_jobs() {
    let dir = create_test_dir();
    write_file(dir.path(), "snapshot.yaml", &snapshot_yaml(&[], &[]));
    write_file(dir.path(), "jobs.yaml", &jobs_yaml(&["build", "build"], &[]));

    let output = cli_command()
        .args([
            "resolve",
            dir.path().join("snapshot.yaml").to_str().unwrap(),
            "--jobs",
            dir.path().join("jobs.yaml").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate pre-submit job names: build"));
}
