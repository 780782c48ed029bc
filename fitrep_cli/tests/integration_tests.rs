//! Integration tests for the fitrep binary.
//!
//! These tests verify end-to-end behavior including:
//! - Single-record report computation and rendering
//! - JSON output mode
//! - Batch processing with per-record error isolation
//! - Config-driven batches

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitrep"))
}

/// Helper to write a config file into a temp dir and return its path
fn write_config(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path
}

/// Empty config: all defaults, keeps tests independent of any user config
fn default_config(temp_dir: &TempDir) -> PathBuf {
    write_config(temp_dir, "")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout sensor report calculator"));
}

#[test]
fn test_report_running() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .args(["report", "RUN", "15000", "1", "75"])
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Running"))
        .stdout(predicate::str::contains("Distance: 9.750 km"))
        .stdout(predicate::str::contains("Mean speed: 9.750 km/h"))
        .stdout(predicate::str::contains("Calories burned: 699.750."));
}

#[test]
fn test_report_swimming_template() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .args(["report", "SWM", "720", "1", "80", "25", "40"])
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000.",
        ));
}

#[test]
fn test_report_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = cli()
        .args(["report", "RUN", "15000", "1", "75", "--json"])
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout is not valid JSON");
    assert_eq!(parsed["kind_name"], "Running");
    assert_eq!(parsed["calories"], 699.75);
    assert_eq!(parsed["distance_km"], 9.75);
}

#[test]
fn test_unknown_code_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .args(["report", "XYZ", "1", "2", "3"])
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("XYZ"));
}

#[test]
fn test_wrong_arity_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .args(["report", "RUN", "1", "2"])
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 3 parameters"));
}

#[test]
fn test_batch_runs_demo_packets() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .arg("batch")
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Swimming"))
        .stdout(predicate::str::contains("Training type: Running"))
        .stdout(predicate::str::contains("Training type: SportsWalking"))
        .stdout(predicate::str::contains("Calories burned: 336.000."));
}

#[test]
fn test_default_command_is_batch() {
    let temp_dir = tempfile::tempdir().unwrap();

    cli()
        .arg("--config")
        .arg(default_config(&temp_dir))
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Swimming"));
}

#[test]
fn test_batch_from_config_replaces_demo() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &temp_dir,
        r#"
[[batch.packets]]
code = "RUN"
params = [1000.0, 1.0, 60.0]
"#,
    );

    cli()
        .arg("batch")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Running"))
        .stdout(predicate::str::contains("Training type: Swimming").not());
}

#[test]
fn test_batch_isolates_bad_records() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &temp_dir,
        r#"
[[batch.packets]]
code = "XYZ"
params = [1.0, 2.0, 3.0]

[[batch.packets]]
code = "RUN"
params = [15000.0, 1.0, 75.0]
"#,
    );

    cli()
        .arg("batch")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Running"))
        .stderr(predicate::str::contains("Skipping record XYZ"));
}

#[test]
fn test_batch_fails_when_every_record_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &temp_dir,
        r#"
[[batch.packets]]
code = "XYZ"
params = [1.0, 2.0, 3.0]
"#,
    );

    cli()
        .arg("batch")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skipping record XYZ"));
}

#[test]
fn test_output_format_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &temp_dir,
        r#"
[output]
format = "json"
"#,
    );

    let output = cli()
        .arg("batch")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Three demo packets, one JSON report per line
    let lines: Vec<_> = output
        .split(|b| *b == b'\n')
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let parsed: serde_json::Value =
            serde_json::from_slice(line).expect("batch line is not valid JSON");
        assert!(parsed["calories"].as_f64().unwrap() > 0.0);
    }
}

#[test]
fn test_identical_inputs_render_identically() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = default_config(&temp_dir);

    let run = |config: &PathBuf| {
        cli()
            .args(["report", "WLK", "9000", "1", "75", "180"])
            .arg("--config")
            .arg(config)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(&config), run(&config));
}
