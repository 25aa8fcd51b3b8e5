//! Decode failures.
//!
//! A [`DecodeError`] means a file could not be turned into an element tree
//! at all. It is fatal for that file only; callers are expected to report it
//! together with the file path and move on to the next file.

use thiserror::Error;

/// Error returned when a diagram file cannot be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("no <diagram> element found")]
    MissingDiagram,

    #[error("<diagram> element has neither inline text nor a nested mxGraphModel")]
    EmptyDiagram,

    #[error("diagram payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("diagram payload could not be inflated: {0}")]
    Inflate(#[from] std::io::Error),

    #[error("diagram payload is not valid UTF-8 after decoding: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

impl DecodeError {
    /// Short advice on how to fix the file, if there is any.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DecodeError::Xml(_) => Some("the file is not well-formed XML; re-save it from draw.io"),
            DecodeError::MissingDiagram | DecodeError::EmptyDiagram => {
                Some("the file does not look like a draw.io diagram")
            }
            DecodeError::Base64(_) | DecodeError::Inflate(_) | DecodeError::Encoding(_) => Some(
                "the compressed payload is corrupt; try saving with File > Properties > Compressed disabled",
            ),
        }
    }
}
