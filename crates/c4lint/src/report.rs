//! Textual rendering of per-file lint results.

use std::fmt;

use c4lint_core::element::Category;

use crate::{export::NormalizedModel, validate::LintOutcome};

const RULE_WIDTH: usize = 60;

/// Everything printed for one linted file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    source: String,
    include_ids: bool,
    outcome: LintOutcome,
    export: Option<NormalizedModel>,
}

impl FileReport {
    /// Creates a report for `source` without an export section.
    pub fn new(source: impl Into<String>, include_ids: bool, outcome: LintOutcome) -> Self {
        Self {
            source: source.into(),
            include_ids,
            outcome,
            export: None,
        }
    }

    /// Appends the normalized model to the rendered report.
    pub fn with_export(mut self, model: NormalizedModel) -> Self {
        self.export = Some(model);
        self
    }

    /// The linted file.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The lint outcome.
    pub fn outcome(&self) -> &LintOutcome {
        &self.outcome
    }

    /// The exported model, if requested.
    pub fn export(&self) -> Option<&NormalizedModel> {
        self.export.as_ref()
    }

    /// Returns `true` if the file has at least one error.
    pub fn has_errors(&self) -> bool {
        self.outcome
            .report()
            .is_some_and(|report| report.error_count() > 0)
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "#".repeat(RULE_WIDTH))?;
        writeln!(f, "C4 Linter Input: {}", self.source)?;
        writeln!(
            f,
            "Include IDs in errors: {}",
            if self.include_ids { "Enabled" } else { "Disabled" }
        )?;

        let report = match &self.outcome {
            LintOutcome::NotC4 => return writeln!(f, "No C4 objects found. No linting performed."),
            LintOutcome::Linted(report) => report,
        };

        if report.is_clean() {
            writeln!(f, "No linting issues detected.")?;
        } else {
            for category in Category::ALL {
                let mut findings = report.findings(category).peekable();
                if findings.peek().is_none() {
                    continue;
                }
                writeln!(f, "  === {category} ===")?;
                for finding in findings {
                    writeln!(f, "  {finding}")?;
                }
            }
        }

        writeln!(f, "  === Summary ===")?;
        writeln!(
            f,
            "  {} C4 objects, {} non-C4 objects found.",
            report.c4_objects(),
            report.non_c4_objects()
        )?;

        if let Some(model) = &self.export {
            let json = serde_json::to_string_pretty(model).map_err(|_| fmt::Error)?;
            writeln!(f, "  === Export ===")?;
            for line in json.lines() {
                writeln!(f, "    {line}")?;
            }
        }

        Ok(())
    }
}
