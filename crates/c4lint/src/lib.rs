//! c4lint - Validation and connectivity analysis for C4 architecture diagrams.
//!
//! Decodes draw.io diagrams, checks the C4 attributes on their elements,
//! reports systems that no relationship touches, exports a normalized model
//! and joins the systems of many diagrams into one connectivity graph.

pub mod classify;
pub mod config;
pub mod connectivity;
pub mod export;
pub mod matcher;
pub mod network;
pub mod report;
pub mod validate;

mod error;
mod files;

pub use c4lint_core::{attribute, document, element, finding};
pub use c4lint_parser::DecodeError;

pub use error::C4LintError;
pub use files::{DIAGRAM_EXTENSION, diagram_files, is_diagram_file};
pub use validate::{LintOutcome, Validation, ValidationReport, Validator};

use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use rayon::prelude::*;

use config::AppConfig;
use document::DiagramDocument;
use export::NormalizedModel;
use matcher::NameMatcher;
use network::NetworkAnalysis;
use report::FileReport;

/// Entry point for linting C4 diagrams.
///
/// A linter owns its configuration and the name matcher built from it, and
/// can be shared across threads.
///
/// # Examples
///
/// ```rust,no_run
/// use c4lint::{Linter, config::AppConfig};
///
/// let linter = Linter::new(AppConfig::default())
///     .with_known_names(vec!["Acme Billing".to_string()]);
///
/// let report = linter
///     .lint_file("diagrams/C4 L1 Acme Billing.drawio")
///     .expect("Failed to read diagram");
/// println!("{report}");
/// ```
#[derive(Debug, Default)]
pub struct Linter {
    config: AppConfig,
    matcher: NameMatcher,
}

impl Linter {
    /// Create a new linter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Lint rules, reference vocabulary and report options
    pub fn new(config: AppConfig) -> Self {
        let matcher = Self::build_matcher(&config);
        Self { config, matcher }
    }

    /// Adds names to the reference vocabulary.
    pub fn with_known_names(mut self, names: Vec<String>) -> Self {
        self.config.lint_mut().extend_known_names(names);
        self.matcher = Self::build_matcher(&self.config);
        self
    }

    /// The configuration this linter was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// A validator borrowing this linter's rules and vocabulary.
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(self.config.lint(), &self.matcher)
    }

    /// Decode diagram content that was read elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `C4LintError::Decode` carrying `source` if the content is not
    /// a diagram.
    pub fn decode(&self, source: &str, content: &str) -> Result<DiagramDocument, C4LintError> {
        c4lint_parser::decode(source, content)
            .map_err(|err| C4LintError::new_decode_error(err, source))
    }

    /// Read and decode the diagram at `path`.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<DiagramDocument, C4LintError> {
        files::read_document(path.as_ref())
    }

    /// Lint a decoded document and render its report.
    pub fn lint_document(&self, document: DiagramDocument) -> FileReport {
        info!(source = document.source(), elements = document.elements().len(); "Linting diagram");

        let mut validation = Validation::new(document);
        let outcome = validation.run(&self.validator()).clone();
        trace!(outcome:?; "Lint outcome");

        let report = FileReport::new(
            validation.document().source(),
            self.config.lint().include_ids(),
            outcome,
        );
        if self.config.report().include_export() && report.outcome().report().is_some() {
            report.with_export(self.export(validation.document()))
        } else {
            report
        }
    }

    /// Read, decode and lint the diagram at `path`.
    ///
    /// # Errors
    ///
    /// Returns `C4LintError` if the file cannot be read or decoded.
    pub fn lint_file(&self, path: impl AsRef<Path>) -> Result<FileReport, C4LintError> {
        let document = self.read(path)?;
        Ok(self.lint_document(document))
    }

    /// Lint every diagram under `root`, or `root` itself if it is a file.
    ///
    /// Files are linted in parallel; results come back in path order. A file
    /// that fails to decode yields an `Err` entry and does not stop the run.
    ///
    /// # Errors
    ///
    /// Returns `C4LintError::Io` if the directory cannot be walked.
    pub fn lint_path(
        &self,
        root: impl AsRef<Path>,
    ) -> Result<Vec<(PathBuf, Result<FileReport, C4LintError>)>, C4LintError> {
        let paths = files::diagram_files(root.as_ref())?;
        info!(files = paths.len(); "Linting diagrams");

        let results: Vec<_> = paths
            .into_par_iter()
            .map(|path| {
                let report = self.lint_file(&path);
                (path, report)
            })
            .collect();

        debug!(
            failed = results.iter().filter(|(_, result)| result.is_err()).count();
            "Linting finished"
        );
        Ok(results)
    }

    /// Build the global system graph of every diagram under `root`.
    ///
    /// # Errors
    ///
    /// Returns `C4LintError::Io` if the directory cannot be walked.
    pub fn analyze_network(&self, root: impl AsRef<Path>) -> Result<NetworkAnalysis, C4LintError> {
        network::build_global_graph(root.as_ref())
    }

    /// Export the typed elements and relationships of `document`.
    pub fn export(&self, document: &DiagramDocument) -> NormalizedModel {
        NormalizedModel::from_document(document)
    }

    fn build_matcher(config: &AppConfig) -> NameMatcher {
        let lint = config.lint();
        NameMatcher::new(lint.known_names().to_vec())
            .with_threshold(lint.similarity_threshold())
            .with_max_suggestions(lint.max_suggestions())
    }
}
