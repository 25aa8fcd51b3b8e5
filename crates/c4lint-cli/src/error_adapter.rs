//! Error adapter for converting C4LintError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use c4lint::C4LintError;

/// Adapter giving a [`C4LintError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a C4LintError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            C4LintError::Io(_) => "c4lint::io",
            C4LintError::Read { .. } => "c4lint::read",
            C4LintError::Decode { .. } => "c4lint::decode",
            C4LintError::Config(_) => "c4lint::config",
            C4LintError::Export(_) => "c4lint::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            C4LintError::Decode { err, .. } => err.help()?,
            C4LintError::Config(_) => "check the configuration file against the documented keys",
            C4LintError::Io(_) | C4LintError::Read { .. } | C4LintError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Render `err` as a graphical miette report.
///
/// Falls back to the plain error message if rendering fails.
pub fn render(err: &C4LintError) -> String {
    let reporter = GraphicalReportHandler::new();
    let mut writer = String::new();
    match reporter.render_report(&mut writer, &ErrorAdapter(err)) {
        Ok(()) => writer,
        Err(_) => err.to_string(),
    }
}
