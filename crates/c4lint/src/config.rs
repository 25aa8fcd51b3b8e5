//! Configuration types for C4 diagram linting.
//!
//! This module provides configuration structures that control which rules
//! run and how reports are rendered. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining lint and report settings.
//! - [`LintConfig`] - Controls the validation rules and the name matcher.
//! - [`ReportConfig`] - Controls what a rendered report includes.
//!
//! # Example
//!
//! ```
//! # use c4lint::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.lint().check_filename());
//! assert_eq!(config.lint().max_suggestions(), 3);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining lint and report settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Lint configuration section.
    #[serde(default)]
    lint: LintConfig,

    /// Report configuration section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified lint and report configurations.
    ///
    /// # Arguments
    ///
    /// * `lint` - Validation rule settings.
    /// * `report` - Report rendering options.
    pub fn new(lint: LintConfig, report: ReportConfig) -> Self {
        Self { lint, report }
    }

    /// Returns the lint configuration.
    pub fn lint(&self) -> &LintConfig {
        &self.lint
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns the lint configuration for modification.
    pub fn lint_mut(&mut self) -> &mut LintConfig {
        &mut self.lint
    }

    /// Returns the report configuration for modification.
    pub fn report_mut(&mut self) -> &mut ReportConfig {
        &mut self.report
    }
}

/// Validation rule configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Reference vocabulary of known software system names.
    known_names: Vec<String>,

    /// Minimum similarity ratio for a near-miss name to be a warning rather than an error.
    similarity_threshold: f64,

    /// Maximum number of name suggestions attached to a finding.
    max_suggestions: usize,

    /// Whether file names must follow the `C4 L<x> <name>.drawio` convention.
    check_filename: bool,

    /// Whether element identifiers are appended to missing-attribute findings.
    include_ids: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            known_names: Vec::new(),
            similarity_threshold: 0.6,
            max_suggestions: 3,
            check_filename: true,
            include_ids: false,
        }
    }
}

impl LintConfig {
    /// Returns the known software system names.
    pub fn known_names(&self) -> &[String] {
        &self.known_names
    }

    /// Returns the similarity ratio separating warnings from errors.
    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Returns the maximum number of name suggestions.
    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Returns whether the file name convention is enforced.
    pub fn check_filename(&self) -> bool {
        self.check_filename
    }

    /// Returns whether element identifiers are included in findings.
    pub fn include_ids(&self) -> bool {
        self.include_ids
    }

    /// Appends names to the reference vocabulary.
    pub fn extend_known_names(&mut self, names: impl IntoIterator<Item = String>) {
        self.known_names.extend(names);
    }

    /// Enables or disables the file name convention check.
    pub fn set_check_filename(&mut self, enabled: bool) {
        self.check_filename = enabled;
    }

    /// Enables or disables element identifiers in findings.
    pub fn set_include_ids(&mut self, enabled: bool) {
        self.include_ids = enabled;
    }
}

/// Report rendering configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Whether the normalized model export is appended to each report.
    include_export: bool,
}

impl ReportConfig {
    /// Returns whether the normalized model is appended to reports.
    pub fn include_export(&self) -> bool {
        self.include_export
    }

    /// Enables or disables the normalized model in reports.
    pub fn set_include_export(&mut self, enabled: bool) {
        self.include_export = enabled;
    }
}
