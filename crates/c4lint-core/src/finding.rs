//! Findings produced by validation.
//!
//! A [`Finding`] is a single error or warning about a diagram. Findings are
//! data, not failures: a diagram usually has several at once and the caller
//! wants all of them.

use std::fmt;

/// The severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A modeling defect that must be fixed.
    Error,

    /// An advisory issue, such as a near-miss system name.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Marker printed in front of every rendered finding.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// A single validation finding.
///
/// # Example
///
/// ```
/// # use c4lint_core::finding::Finding;
/// let finding = Finding::error("'c4Name' property missing")
///     .with_context("c4Type: Software System");
/// assert_eq!(
///     finding.to_string(),
///     "ERROR: 'c4Name' property missing ---  c4Type: Software System"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    severity: Severity,
    message: String,
    context: Option<String>,
    suggestions: Vec<String>,
}

impl Finding {
    /// Create an error finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Attach a description of the offending element.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach ranked replacement suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Get the severity of this finding.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the element context, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Get the suggestions, best first.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(context) = &self.context {
            write!(f, " ---  {context}")?;
        }
        if !self.suggestions.is_empty() {
            write!(f, " (did you mean: {}?)", self.suggestions.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let finding = Finding::error("No elements of type Object found.");
        assert_eq!(finding.to_string(), "ERROR: No elements of type Object found.");
        assert!(finding.severity().is_error());
    }

    #[test]
    fn test_warning_with_suggestions() {
        let finding = Finding::warning("name 'Acme Biling' not found in known strings")
            .with_suggestions(vec!["Acme Billing".to_string(), "Acme Payments".to_string()]);
        assert!(finding.severity().is_warning());
        assert_eq!(
            finding.to_string(),
            "WARN: name 'Acme Biling' not found in known strings (did you mean: Acme Billing, Acme Payments?)"
        );
    }

    #[test]
    fn test_context_accessor() {
        let finding = Finding::error("missing").with_context("c4Type: Person");
        assert_eq!(finding.context(), Some("c4Type: Person"));
        assert!(finding.suggestions().is_empty());
    }
}
