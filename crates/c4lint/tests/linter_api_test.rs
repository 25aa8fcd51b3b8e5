//! Integration tests for the Linter API
//!
//! These tests run the linter over the diagrams shipped in `demos/`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use c4lint::{C4LintError, LintOutcome, Linter, config::AppConfig, element::Category};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn known_systems() -> Vec<String> {
    fs::read_to_string(demo("known-systems.txt"))
        .expect("Failed to read known systems")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_linter_api_exists() {
    let _linter = Linter::default();
}

#[test]
fn test_compressed_diagram_is_clean() {
    let linter = Linter::default().with_known_names(known_systems());
    let report = linter
        .lint_file(demo("C4 L1 Acme Billing.drawio"))
        .expect("Failed to lint diagram");

    let LintOutcome::Linted(validation) = report.outcome() else {
        panic!("Expected a C4 diagram");
    };
    assert!(validation.is_clean(), "Unexpected findings:\n{report}");
    assert_eq!(validation.c4_objects(), 5);
    assert_eq!(validation.non_c4_objects(), 0);
    assert!(report.to_string().contains("No linting issues detected."));
}

#[test]
fn test_plain_diagram_findings() {
    let linter = Linter::default();
    let report = linter
        .lint_file(demo("C4 L1 Acme Payments.drawio"))
        .expect("Failed to lint diagram");
    let validation = report.outcome().report().expect("Expected a C4 diagram");

    let systems = validation.errors(Category::System);
    assert_eq!(systems.len(), 1);
    assert!(systems[0].message().contains("'Fraud Check'"));
    assert!(systems[0].message().contains("is not connected by any relationship"));

    let relationships = validation.errors(Category::Relationship);
    assert_eq!(relationships.len(), 1);
    assert!(relationships[0].message().contains("(id: rel-2)"));

    assert!(validation.errors(Category::Other).is_empty());
    assert!(report.has_errors());
}

#[test]
fn test_non_c4_diagram_is_skipped() {
    let report = Linter::default()
        .lint_file(demo("whiteboard.drawio"))
        .expect("Failed to lint diagram");
    assert_eq!(report.outcome(), &LintOutcome::NotC4);
    assert!(
        report
            .to_string()
            .contains("No C4 objects found. No linting performed.")
    );
}

#[test]
fn test_vocabulary_typo_is_a_warning() {
    let linter = Linter::default().with_known_names(vec![
        "Acme Billings".to_string(),
        "Acme Ledger".to_string(),
    ]);
    let report = linter
        .lint_file(demo("C4 L1 Acme Billing.drawio"))
        .expect("Failed to lint diagram");
    let validation = report.outcome().report().expect("Expected a C4 diagram");

    assert_eq!(validation.error_count(), 0);
    let warnings = validation.warnings(Category::System);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestions()[0], "Acme Billings");
    assert!(report.to_string().contains("WARN: Software System name 'Acme Billing'"));
}

#[test]
fn test_export_from_compressed_diagram() {
    let linter = Linter::default();
    let document = linter
        .read(demo("C4 L1 Acme Billing.drawio"))
        .expect("Failed to read diagram");
    let model = linter.export(&document);

    assert_eq!(model.elements.len(), 3);
    assert_eq!(model.relationships.len(), 2);
    assert_eq!(
        model.elements[0].description,
        "Issues invoices and collects payments"
    );
    assert_eq!(model.relationships[1].technology.as_deref(), Some("AMQP"));
    assert_eq!(model.relationships[1].source.as_deref(), Some("billing"));
    assert_eq!(model.relationships[1].destination.as_deref(), Some("ledger"));
}

#[test]
fn test_report_includes_export_when_configured() {
    let mut config = AppConfig::default();
    config.report_mut().set_include_export(true);
    config.lint_mut().set_include_ids(true);

    let report = Linter::new(config)
        .lint_file(demo("C4 L1 Acme Billing.drawio"))
        .expect("Failed to lint diagram");
    let rendered = report.to_string();

    assert!(rendered.contains("Include IDs in errors: Enabled"));
    assert!(rendered.contains("  === Export ===\n"));
    assert!(rendered.contains("\"name\": \"Acme Ledger\""));
}

#[test]
fn test_lint_path_keeps_going_after_failures() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::copy(
        demo("C4 L1 Acme Payments.drawio"),
        dir.path().join("C4 L1 Acme Payments.drawio"),
    )
    .expect("Failed to copy diagram");
    fs::write(dir.path().join("C4 L1 Broken.drawio"), "<mxfile><diagram>")
        .expect("Failed to write diagram");

    let results = Linter::default()
        .lint_path(dir.path())
        .expect("Failed to walk directory");

    assert_eq!(results.len(), 2);
    assert!(results[0].0.ends_with("C4 L1 Acme Payments.drawio"));
    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(C4LintError::Decode { .. })));
}

#[test]
fn test_decode_error_carries_source() {
    let err = Linter::default()
        .decode("C4 L1 Empty.drawio", "<mxfile/>")
        .expect_err("Expected decode failure");
    assert!(err.to_string().contains("C4 L1 Empty.drawio"));
}
