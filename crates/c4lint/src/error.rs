//! Error types for C4 lint operations.
//!
//! This module provides the main error type [`C4LintError`] which wraps
//! the failures that stop a single file (or a whole run) from being
//! processed. Validation findings are never errors; they live in
//! [`crate::ValidationReport`].

use std::io;

use thiserror::Error;

use c4lint_parser::DecodeError;

/// The main error type for C4 lint operations.
#[derive(Debug, Error)]
pub enum C4LintError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {path}: {err}")]
    Read { path: String, err: io::Error },

    #[error("Error parsing XML file: {path}, {err}")]
    Decode { path: String, err: DecodeError },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}

impl C4LintError {
    /// Create a new `Decode` error for the file at `path`.
    pub fn new_decode_error(err: DecodeError, path: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            err,
        }
    }

    /// Create a new `Read` error for the file at `path`.
    pub fn new_read_error(err: io::Error, path: impl Into<String>) -> Self {
        Self::Read {
            path: path.into(),
            err,
        }
    }
}
