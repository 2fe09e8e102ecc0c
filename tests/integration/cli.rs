//! The `linkseq` binary, run on script files.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("Failed to write script");
    path
}

fn linkseq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkseq"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to spawn linkseq")
}

#[test]
fn test_run_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_script(
        &dir,
        "ops.json",
        r#"{"ops": [{"op": "append", "value": 1}, {"op": "prepend", "value": 0}]}"#,
    );

    let output = linkseq(&["run", "--json", path.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rendered"], "LinkedSequence{0, 1}");
    assert_eq!(report["verification"]["length"], 2);
}

#[test]
fn test_deny_null_flag_overrides_script() {
    let dir = TempDir::new().unwrap();
    let path = write_script(
        &dir,
        "nulls.json",
        r#"{"allowNull": true, "ops": [{"op": "append", "value": null}]}"#,
    );

    let output = linkseq(&["run", "--json", "--deny-null", path.to_str().unwrap()]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["allowNull"], false);
    assert_eq!(report["steps"][0]["outcome"]["kind"], "error");
    assert_eq!(report["rendered"], "LinkedSequence{}");
}

#[test]
fn test_table_output_mentions_result() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "table.json", r#"{"ops": [{"op": "append", "value": 5}]}"#);

    let output = linkseq(&["run", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("LinkedSequence{5}"));
    assert!(stdout.contains("OPERATIONS"));
}

#[test]
fn test_check_reports_well_formed() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "check.json", r#"{"ops": [{"op": "append", "value": "x"}]}"#);

    let output = linkseq(&["check", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with('✓'));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");

    let output = linkseq(&["check", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn test_malformed_script_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "bad.json", r#"{"ops": [{"op": "append""#);

    let output = linkseq(&["run", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid script"));
}
