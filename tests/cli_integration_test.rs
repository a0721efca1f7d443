//! Tests of the `scalemap` binary.

mod common;

use assert_cmd::Command;
use common::*;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn scalemap() -> Command {
    let mut cmd = Command::cargo_bin("scalemap").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_compute_writes_default_output_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(
        dir.path(),
        &[complete_male(), complete_female(), incomplete_male()],
    );

    let output = scalemap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .arg("compute")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All scales computed. See output.csv"));

    let exported = fs::read_to_string(dir.path().join("output.csv")).unwrap();
    let lines: Vec<_> = exported.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(",Timestamp,Above18,Consent,spdm_q1,"));
    assert!(lines[1].starts_with("0,2017/03/01 10:00:00,"));
    assert!(lines[1].ends_with(",27,49,77.14,42.86,male-dominant"));
}

#[test]
fn test_compute_without_path_fails_before_processing() {
    let dir = TempDir::new().unwrap();
    let output = scalemap()
        .current_dir(dir.path())
        .arg("compute")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_compute_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = scalemap()
        .current_dir(dir.path())
        .args(["compute", "does-not-exist.csv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.csv"));
}

#[test]
fn test_json_summary_and_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(dir.path(), &[complete_male(), complete_female()]);
    let target = dir.path().join("scored.csv");

    let output = scalemap()
        .current_dir(dir.path())
        .arg("compute")
        .arg(&input)
        .arg("--output")
        .arg(&target)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["filter"]["total_rows"], 2);
    assert_eq!(summary["filter"]["retained"], 1);
    assert_eq!(summary["classifications"]["male-dominant"], 1);
    assert!(target.exists());
    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_config_file_changes_excluded_gender() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(dir.path(), &[complete_male(), complete_female()]);
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        indoc! {r#"
            [output]
            path = "from-config.csv"

            [cohort]
            excluded_gender = "Male"
        "#},
    )
    .unwrap();

    let output = scalemap()
        .current_dir(dir.path())
        .arg("compute")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let exported = fs::read_to_string(dir.path().join("from-config.csv")).unwrap();
    let lines: Vec<_> = exported.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].contains(",Female,"));
}

#[test]
fn test_invalid_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = write_survey(dir.path(), &[complete_male()]);
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[classification]\nupper = 10.0\nlower = 50.0\n").unwrap();

    let output = scalemap()
        .current_dir(dir.path())
        .arg("compute")
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();

    scalemap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".scalemap.toml").exists());

    scalemap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    scalemap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
