//! CLI logic for the C4 diagram linter.
//!
//! This module contains the core CLI logic: loading configuration, running
//! the linter or the network analysis, and writing the rendered output.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, LintArgs, NetworkArgs};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{error, info};

use c4lint::{C4LintError, Linter, config::AppConfig};

/// Run the c4lint CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `C4LintError` for:
/// - Configuration loading errors
/// - An unreadable names file
/// - A directory that cannot be walked, or a single input file that cannot be decoded
/// - Output I/O errors
///
/// Decode failures of individual files in a directory run are logged and skipped.
pub fn run(args: &Args) -> Result<(), C4LintError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Lint(lint) => run_lint(lint, app_config),
        Command::Network(network) => run_network(network, app_config),
    }
}

fn run_lint(args: &LintArgs, mut app_config: AppConfig) -> Result<(), C4LintError> {
    info!(input_path = args.input; "Linting diagrams");

    if let Some(names) = &args.names {
        let names = config::load_names(names)?;
        app_config.lint_mut().extend_known_names(names);
    }
    if args.include_ids {
        app_config.lint_mut().set_include_ids(true);
    }
    if args.no_filename_check {
        app_config.lint_mut().set_check_filename(false);
    }
    if args.export {
        app_config.report_mut().set_include_export(true);
    }

    let linter = Linter::new(app_config);

    // A lone input file that cannot be decoded is fatal.
    if Path::new(&args.input).is_file() {
        let report = linter.lint_file(&args.input)?;
        return write_output(args.output.as_deref(), &report.to_string());
    }

    let results = linter.lint_path(&args.input)?;

    let mut rendered = String::new();
    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(report) => rendered.push_str(&report.to_string()),
            Err(err) => {
                failed += 1;
                error!(path:? = path; "{}", error_adapter::render(err));
            }
        }
    }

    write_output(args.output.as_deref(), &rendered)?;
    info!(files = results.len(), failed; "Linting completed");
    Ok(())
}

fn run_network(args: &NetworkArgs, app_config: AppConfig) -> Result<(), C4LintError> {
    info!(input_path = args.input; "Analyzing system network");

    let linter = Linter::new(app_config);
    let analysis = linter.analyze_network(&args.input)?;

    for (path, err) in analysis.failures() {
        error!(path:? = path; "{}", error_adapter::render(err));
    }

    write_output(args.output.as_deref(), &analysis.to_string())
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), C4LintError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            info!(output_file = path; "Report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
