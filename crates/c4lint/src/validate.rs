//! The validation engine.
//!
//! [`Validator::validate`] applies every rule to every applicable element and
//! returns a fresh [`ValidationReport`]. Findings are accumulated, never
//! thrown: a diagram with ten defects yields ten findings.
//!
//! [`Validation`] wraps one document with an explicit status. Its first run
//! applies the C4 gate and validates; later runs return the cached outcome,
//! so findings are never appended twice.

use std::{path::Path, sync::LazyLock};

use indexmap::IndexMap;
use log::{debug, trace};
use regex::Regex;

use c4lint_core::{
    attribute,
    document::DiagramDocument,
    element::{Category, ElementKind, GraphElement},
    finding::Finding,
};

use crate::{
    classify,
    config::LintConfig,
    connectivity,
    matcher::{NameMatch, NameMatcher},
};

static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^C4 L[0-4] .+\.drawio$").expect("filename pattern is a valid regex")
});

/// Findings of one validation pass over one document.
///
/// Errors and warnings are kept in two parallel maps keyed by [`Category`];
/// every category is always present, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    source: String,
    errors: IndexMap<Category, Vec<Finding>>,
    warnings: IndexMap<Category, Vec<Finding>>,
    c4_objects: usize,
    non_c4_objects: usize,
}

impl ValidationReport {
    fn new(source: &str) -> Self {
        let buckets = || -> IndexMap<Category, Vec<Finding>> {
            Category::ALL
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect()
        };
        Self {
            source: source.to_string(),
            errors: buckets(),
            warnings: buckets(),
            c4_objects: 0,
            non_c4_objects: 0,
        }
    }

    /// Identifier of the validated file.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Errors in `category`, in the order they were found.
    pub fn errors(&self, category: Category) -> &[Finding] {
        self.errors.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Warnings in `category`, in the order they were found.
    pub fn warnings(&self, category: Category) -> &[Finding] {
        self.warnings.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Errors followed by warnings of `category`.
    pub fn findings(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.errors(category)
            .iter()
            .chain(self.warnings(category).iter())
    }

    /// Total number of errors over all categories.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Total number of warnings over all categories.
    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    /// Returns `true` if there are neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0 && self.warning_count() == 0
    }

    /// Number of elements that take part in the C4 model.
    pub fn c4_objects(&self) -> usize {
        self.c4_objects
    }

    /// Number of elements without any C4 attribute.
    pub fn non_c4_objects(&self) -> usize {
        self.non_c4_objects
    }

    fn emit(&mut self, category: Category, finding: Finding) {
        let bucket = if finding.severity().is_error() {
            &mut self.errors
        } else {
            &mut self.warnings
        };
        bucket.entry(category).or_default().push(finding);
    }
}

/// Result of linting a document behind the C4 gate.
#[derive(Debug, Clone, PartialEq)]
pub enum LintOutcome {
    /// The document has no C4 attributes at all; nothing was checked.
    NotC4,
    /// The document was validated.
    Linted(ValidationReport),
}

impl LintOutcome {
    /// The report, if the document was validated.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            LintOutcome::NotC4 => None,
            LintOutcome::Linted(report) => Some(report),
        }
    }
}

/// Applies the validation rules with a given configuration and vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    config: &'a LintConfig,
    matcher: &'a NameMatcher,
}

impl<'a> Validator<'a> {
    /// Creates a validator.
    pub fn new(config: &'a LintConfig, matcher: &'a NameMatcher) -> Self {
        Self { config, matcher }
    }

    /// Validates `document` against every rule.
    ///
    /// This is a pure function of the document, the configuration and the
    /// vocabulary: calling it twice yields equal reports.
    pub fn validate(&self, document: &DiagramDocument) -> ValidationReport {
        let mut report = ValidationReport::new(document.source());

        for element in document.elements() {
            let kind = element.kind();
            if kind.is_c4() {
                report.c4_objects += 1;
            } else {
                report.non_c4_objects += 1;
            }

            match kind {
                ElementKind::Relationship => {
                    self.check_required(
                        &mut report,
                        element,
                        kind,
                        &attribute::RELATIONSHIP_REQUIRED,
                    );
                }
                ElementKind::System => {
                    self.check_required(
                        &mut report,
                        element,
                        kind,
                        &attribute::ELEMENT_REQUIRED,
                    );
                    if let Some(name) = element.name() {
                        self.check_name(&mut report, element, name);
                    }
                }
                ElementKind::Actor | ElementKind::Other => {
                    self.check_required(
                        &mut report,
                        element,
                        kind,
                        &attribute::ELEMENT_REQUIRED,
                    );
                }
                ElementKind::Untyped => {
                    report.emit(
                        Category::Other,
                        Finding::error(format!(
                            "Non-C4 element found. Label: {}",
                            element.label().unwrap_or("No label")
                        )),
                    );
                }
            }
        }

        // An empty document gets the no-objects finding and nothing else.
        if document.is_empty() {
            report.emit(
                Category::Other,
                Finding::error("No elements of type Object found."),
            );
            debug!(source = document.source(); "No elements found");
            return report;
        }

        let connected = connectivity::connected_systems(document);
        for finding in connectivity::unconnected_with(document, &connected) {
            report.emit(Category::System, finding);
        }
        for finding in connected.into_defects() {
            report.emit(Category::Relationship, finding);
        }

        if self.config.check_filename() && !filename_matches(document.source()) {
            report.emit(
                Category::Other,
                Finding::error(format!(
                    "Filename '{}' does not match expected format 'C4 L<x> <system name>.drawio'",
                    document.source()
                )),
            );
        }

        debug!(
            source = document.source(),
            errors = report.error_count(),
            warnings = report.warning_count();
            "Validation finished"
        );
        report
    }

    /// Validates `document` if it is a C4 diagram at all.
    pub fn lint(&self, document: &DiagramDocument) -> LintOutcome {
        if classify::is_c4_model(document) {
            LintOutcome::Linted(self.validate(document))
        } else {
            debug!(source = document.source(); "No C4 objects found, skipping");
            LintOutcome::NotC4
        }
    }

    fn check_required(
        &self,
        report: &mut ValidationReport,
        element: &GraphElement,
        kind: ElementKind,
        required: &[&str],
    ) {
        for key in required {
            if element.non_blank(key).is_some() {
                continue;
            }
            let mut context = describe(element);
            if self.config.include_ids() {
                context.push_str(&format!(" (mxCell id: {})", element.id()));
            }
            report.emit(
                kind.category(),
                Finding::error(format!("'{key}' property missing")).with_context(context),
            );
        }
    }

    fn check_name(&self, report: &mut ValidationReport, element: &GraphElement, name: &str) {
        if self.matcher.is_empty() {
            return;
        }
        let name = name.trim();
        trace!(name; "Matching system name");

        let finding = match self.matcher.check(name) {
            NameMatch::Exact => return,
            NameMatch::Close(suggestions) => Finding::warning(format!(
                "Software System name '{name}' not found exactly in known strings"
            ))
            .with_suggestions(suggestions),
            NameMatch::Unknown(suggestions) => Finding::error(format!(
                "Software System name '{name}' not found in known strings"
            ))
            .with_suggestions(suggestions),
        };
        report.emit(
            Category::System,
            finding.with_context(format!("id: {}", element.id())),
        );
    }
}

/// Describes an element for humans: its non-blank attributes except the
/// identifier, label and placeholder flag, with newlines flattened.
pub(crate) fn describe(element: &GraphElement) -> String {
    let properties: Vec<String> = element
        .attributes()
        .iter()
        .filter(|(key, value)| {
            !value.trim().is_empty() && !attribute::NON_CONTEXT_ATTRIBUTES.contains(&key.as_str())
        })
        .map(|(key, value)| format!("{key}: {}", value.replace('\n', " ")))
        .collect();

    if properties.is_empty() {
        "No additional properties".to_string()
    } else {
        properties.join(", ")
    }
}

/// Returns `true` if the base name of `source` follows `C4 L<x> <name>.drawio`.
pub fn filename_matches(source: &str) -> bool {
    Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| FILENAME_PATTERN.is_match(name))
}

/// A document together with its validation status.
#[derive(Debug)]
pub struct Validation {
    document: DiagramDocument,
    outcome: Option<LintOutcome>,
}

/// Whether a [`Validation`] has run yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationStatus<'a> {
    Unvalidated,
    Validated(&'a LintOutcome),
}

impl Validation {
    /// Wraps a freshly decoded document.
    pub fn new(document: DiagramDocument) -> Self {
        Self {
            document,
            outcome: None,
        }
    }

    /// The wrapped document.
    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    /// The current status.
    pub fn status(&self) -> ValidationStatus<'_> {
        match &self.outcome {
            None => ValidationStatus::Unvalidated,
            Some(outcome) => ValidationStatus::Validated(outcome),
        }
    }

    /// Lints the document on the first call and returns the cached outcome
    /// on every later call.
    pub fn run(&mut self, validator: &Validator<'_>) -> &LintOutcome {
        if self.outcome.is_some() {
            trace!(source = self.document.source(); "Returning cached validation outcome");
        }
        let document = &self.document;
        self.outcome.get_or_insert_with(|| validator.lint(document))
    }

    /// Consumes the validation, returning the document and its outcome, if any.
    pub fn into_parts(self) -> (DiagramDocument, Option<LintOutcome>) {
        (self.document, self.outcome)
    }
}
