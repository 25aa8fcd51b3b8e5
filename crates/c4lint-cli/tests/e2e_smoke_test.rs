use std::{fs, path::PathBuf};

use tempfile::tempdir;

use c4lint_cli::{Args, Command, LintArgs, NetworkArgs, run};

/// Demo diagrams are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
}

fn lint_args(input: PathBuf, output: PathBuf) -> Args {
    Args {
        command: Command::Lint(LintArgs {
            input: input.to_string_lossy().to_string(),
            names: Some(demos_path().join("known-systems.txt").to_string_lossy().to_string()),
            include_ids: false,
            export: false,
            no_filename_check: false,
            output: Some(output.to_string_lossy().to_string()),
        }),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_lint_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");

    run(&lint_args(demos_path(), output.clone())).expect("Lint run failed");

    let report = fs::read_to_string(&output).expect("Failed to read report");
    assert_eq!(report.matches("C4 Linter Input: ").count(), 3);
    assert!(report.contains("No linting issues detected."));
    assert!(report.contains("  === Systems ===\n  ERROR: Software System 'Fraud Check'"));
    assert!(report.contains("No C4 objects found. No linting performed."));
}

#[test]
fn e2e_smoke_test_lint_single_file_with_export() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("report.txt");

    let mut args = lint_args(demos_path().join("C4 L1 Acme Billing.drawio"), output.clone());
    if let Command::Lint(lint) = &mut args.command {
        lint.export = true;
        lint.include_ids = true;
    }
    run(&args).expect("Lint run failed");

    let report = fs::read_to_string(&output).expect("Failed to read report");
    assert!(report.contains("Include IDs in errors: Enabled"));
    assert!(report.contains("  === Export ===\n"));
    assert!(report.contains("\"destination\": \"ledger\""));
}

#[test]
fn e2e_smoke_test_broken_single_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("C4 L1 Broken.drawio");
    fs::write(&input, "<mxfile>").expect("Failed to write diagram");

    let result = run(&lint_args(input, temp_dir.path().join("report.txt")));
    assert!(result.is_err(), "Broken diagram should fail");
}

#[test]
fn e2e_smoke_test_broken_file_in_directory_is_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagrams");
    fs::create_dir(&input).expect("Failed to create input directory");
    fs::write(input.join("C4 L1 Broken.drawio"), "<mxfile>").expect("Failed to write diagram");
    fs::copy(
        demos_path().join("C4 L1 Acme Payments.drawio"),
        input.join("C4 L1 Acme Payments.drawio"),
    )
    .expect("Failed to copy diagram");

    let output = temp_dir.path().join("report.txt");
    run(&lint_args(input, output.clone())).expect("Lint run failed");

    let report = fs::read_to_string(&output).expect("Failed to read report");
    assert_eq!(report.matches("C4 Linter Input: ").count(), 1);
}

#[test]
fn e2e_smoke_test_network() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("network.txt");

    let args = Args {
        command: Command::Network(NetworkArgs {
            input: demos_path().to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
        }),
        config: None,
        log_level: "off".to_string(),
    };
    run(&args).expect("Network run failed");

    let summary = fs::read_to_string(&output).expect("Failed to read summary");
    assert!(summary.contains("Analyzed 2 C4 diagrams (1 skipped, 0 failed)."));
    assert!(summary.contains("Component 2 (1 systems): Fraud Check"));
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = lint_args(demos_path(), temp_dir.path().join("report.txt"));
    args.config = Some(temp_dir.path().join("absent.toml").to_string_lossy().to_string());

    assert!(run(&args).is_err(), "Missing explicit config should fail");
}
