// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Command-line tests running the `perftables` binary against temp log dirs.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MATRIX_LOG: &str = "\
--- Tiny Matrix Test (100 x 50) ---
Matrix shapes:
- row-major: (100, 50)

=== Multiple Operations Profiling ===
row-major sum: 0.000010 ± 0.000001 seconds (mean ± std over 1000 runs)
col-major sum: 0.000020 ± 0.000002 seconds (mean ± std over 1000 runs)

--- Large Matrix Test (100,000 x 500) ---

=== Multiple Operations Profiling ===
row-major sum: 0.040000 ± 0.004000 seconds (mean ± std over 10 runs)
col-major sum: 0.050000 ± 0.005000 seconds (mean ± std over 10 runs)
";

const DATAFRAME_LOG: &str = "\
--- Tiny DataFrame Test (100 x 50) ---

=== Multiple Operations Profiling ===
row-oriented sum: 0.000030 ± 0.000003 seconds (mean ± std over 1000 runs)
";

fn perftables(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("perftables").expect("Failed to find perftables binary");
    cmd.current_dir(dir);
    cmd
}

fn four_of_five_logs() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for file in ["log_cpp_mat.txt", "log_python_np.txt", "log_R_df.txt"] {
        fs::write(temp_dir.path().join(file), MATRIX_LOG).unwrap();
    }
    fs::write(temp_dir.path().join("log_python_pd.txt"), DATAFRAME_LOG).unwrap();
    temp_dir
}

#[test]
fn test_readme_style_with_missing_backend() {
    let temp_dir = four_of_five_logs();

    perftables(temp_dir.path())
        .arg("--readme-style")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Performance comparison across different languages for Tiny Test (100 x 50):",
        ))
        .stdout(predicate::str::contains(
            "| Operation | Orientation | C++ | NumPy | pandas | R df | R mat |",
        ))
        .stdout(predicate::str::contains("| mean | row<br>col |  |  |  |  |  |"))
        .stderr(predicate::str::contains("log_R_mat.txt"));
}

#[test]
fn test_sections_save_writes_file() {
    let temp_dir = four_of_five_logs();

    perftables(temp_dir.path())
        .args(["--sections", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let content =
        fs::read_to_string(temp_dir.path().join("matrix_performance_all_tests.md")).unwrap();
    assert!(content.starts_with("# Matrix Operations Performance Comparison\n"));
    assert!(content.contains("- **pandas**\n"));
    assert!(!content.contains("- **R mat**"));
    assert!(content.contains("| sum | row<br>col | 0.000010 ± 0.000001s<br>0.000020 ± 0.000002s"));
    assert!(content.find("## Tiny Test").unwrap() < content.find("## Large Test").unwrap());
}

#[test]
fn test_all_writes_every_document() {
    let temp_dir = four_of_five_logs();
    let out_dir = temp_dir.path().join("tables");

    perftables(temp_dir.path())
        .arg("--all")
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("All formats generated successfully"));

    for file in [
        "matrix_performance_all_tests.md",
        "complete_performance_comparison.md",
        "README_performance_table.md",
    ] {
        assert!(out_dir.join(file).exists(), "{} missing", file);
    }
}

#[test]
fn test_all_without_tiny_tier_still_writes_others() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("log_cpp_mat.txt"),
        "--- Large Test ---\n=== Multiple Operations Profiling ===\n\
         row-major sum: 0.040000 ± 0.004000 seconds\n",
    )
    .unwrap();

    perftables(temp_dir.path())
        .arg("--all")
        .assert()
        .success()
        .stderr(predicate::str::contains("Tiny test not found"));

    assert!(temp_dir.path().join("matrix_performance_all_tests.md").exists());
    assert!(temp_dir.path().join("complete_performance_comparison.md").exists());
    assert!(!temp_dir.path().join("README_performance_table.md").exists());
}

#[test]
fn test_unknown_tier_lists_available() {
    let temp_dir = four_of_five_logs();

    perftables(temp_dir.path())
        .args(["--test", "medium", "--save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Test size 'medium' not found"))
        .stderr(predicate::str::contains("Tiny Test (100 x 50), Large Test (100,000 x 500)"));

    assert!(!temp_dir.path().join("medium_test_results.md").exists());
}

#[test]
fn test_tier_to_stdout() {
    let temp_dir = four_of_five_logs();

    perftables(temp_dir.path())
        .args(["--test", "large"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Large Test (100,000 x 500) Performance Results\n\n## Large Test (100,000 x 500)\n",
        ));
}

#[test]
fn test_no_logs_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    perftables(temp_dir.path())
        .arg("--all")
        .assert()
        .success()
        .stderr(predicate::str::contains("No log files found"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_overview_lists_backends_and_tiers() {
    let temp_dir = four_of_five_logs();

    perftables(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Found data for 4 languages ==="))
        .stdout(predicate::str::contains("1. Tiny Test (100 x 50)"))
        .stdout(predicate::str::contains("README-STYLE SUMMARY TABLE"));
}

#[test]
fn test_config_file_selects_backends() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("logs")).unwrap();
    fs::write(temp_dir.path().join("logs/julia.txt"), MATRIX_LOG).unwrap();
    fs::write(
        temp_dir.path().join("perftables.yaml"),
        "log_dir: logs\nbackends:\n  - name: Julia\n    file: julia.txt\n    row_marker: row-major\n    col_marker: col-major\n",
    )
    .unwrap();

    perftables(temp_dir.path())
        .arg("--readme-style")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Operation | Orientation | Julia |"));
}

#[test]
fn test_mode_flags_conflict() {
    let temp_dir = TempDir::new().unwrap();

    perftables(temp_dir.path())
        .args(["--all", "--sections"])
        .assert()
        .failure();
}
