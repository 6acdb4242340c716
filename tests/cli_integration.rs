//! Integration tests for the CLI surface, spawning the real binary.

use std::fs;
use std::process::Command;

fn pixel_gate() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pixel-gate"));
    // Isolate from any ambient configuration.
    for var in [
        "PIXEL_GATE_COMPARATOR",
        "PIXEL_GATE_RESULTS_DIR",
        "PIXEL_GATE_OUTPUT_DIR",
        "PIXEL_GATE_RUN_LOG",
        "PIXEL_GATE_IGNORE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_no_arguments_prints_usage_without_side_effects() {
    let dir = tempfile::tempdir().expect("tempdir");

    let output = pixel_gate()
        .current_dir(dir.path())
        .output()
        .expect("spawn pixel-gate");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage: pixel-gate <COMMAND>"),
        "unexpected stdout: {}",
        stdout
    );

    // No run log or artifact directory may appear.
    assert!(!dir.path().join("comparison.log").exists());
    assert!(!dir.path().join("diff-artifacts").exists());
}

#[test]
fn test_ignore_env_var_skips_suite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let results = dir.path().join("results");
    let log_path = dir.path().join("comparison.log");

    // The only suite has a reference image with no candidate; if it
    // were visited the run would record a failure.
    fs::create_dir_all(results.join("skipme")).unwrap();
    fs::write(results.join("skipme/a.png"), b"png").unwrap();

    let output = pixel_gate()
        .arg("compare")
        .arg(dir.path().join("candidate"))
        .arg("--results")
        .arg(&results)
        .arg("--output")
        .arg(dir.path().join("diff-artifacts"))
        .arg("--log")
        .arg(&log_path)
        .arg("--comparator")
        .arg("/nonexistent/perceptualdiff")
        .env("PIXEL_GATE_IGNORE", "skipme")
        .output()
        .expect("spawn pixel-gate");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
}

#[test]
fn test_ignore_env_var_splits_on_commas() {
    let dir = tempfile::tempdir().expect("tempdir");
    let results = dir.path().join("results");
    let log_path = dir.path().join("comparison.log");

    for suite in ["first", "second"] {
        fs::create_dir_all(results.join(suite)).unwrap();
        fs::write(results.join(suite).join("a.png"), b"png").unwrap();
    }

    let output = pixel_gate()
        .arg("compare")
        .arg(dir.path().join("candidate"))
        .arg("--results")
        .arg(&results)
        .arg("--output")
        .arg(dir.path().join("diff-artifacts"))
        .arg("--log")
        .arg(&log_path)
        .arg("--comparator")
        .arg("/nonexistent/perceptualdiff")
        .env("PIXEL_GATE_IGNORE", "first,second")
        .output()
        .expect("spawn pixel-gate");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
}
