//! Tests for the demo binary.
//!
//! These run the built executable and check its exit status and output.

use std::process::Command;

fn flagscan_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_flagscan"));
    cmd.env_remove("FLAGSCAN_LOG");
    cmd
}

#[test]
fn test_help_lists_flags() {
    let output = flagscan_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage of flagscan:"));
    assert!(stdout.contains("-l, --limit int"));
    assert!(stdout.contains("--name string"));
}

#[test]
fn test_positionals_are_echoed_in_order() {
    let output = flagscan_cmd()
        .args(["a", "-v", "--name=tester", "b", "--", "-c"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "hello, tester");
    assert!(lines.contains(&"timeout=30s"));
    assert_eq!(&lines[lines.len() - 3..], ["a", "b", "-c"]);
}

#[test]
fn test_limit_truncates_output() {
    let output = flagscan_cmd()
        .args(["-l1", "x", "y"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "hello, world\nx\n");
}

#[test]
fn test_missing_value_exits_with_usage() {
    let output = flagscan_cmd()
        .arg("--timeout")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: flag requires argument: --timeout"));
    assert!(stderr.contains("Usage of flagscan:"));
}

#[test]
fn test_unknown_flag_exits_with_error() {
    let output = flagscan_cmd()
        .arg("--bogus")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown flag: --bogus"));
}
