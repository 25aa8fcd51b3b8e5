//! Locating and reading diagram files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, warn};
use walkdir::{DirEntry, WalkDir};

use c4lint_core::document::DiagramDocument;

use crate::error::C4LintError;

/// Extension of draw.io diagram files.
pub const DIAGRAM_EXTENSION: &str = "drawio";

/// Returns `true` if `path` has the diagram file extension.
pub fn is_diagram_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == DIAGRAM_EXTENSION)
}

/// Every diagram file under `root`, sorted by path.
///
/// A `root` that is itself a file is returned as is, whatever its extension.
/// Entries below the root that cannot be read are logged and skipped.
///
/// # Errors
///
/// Returns `C4LintError::Io` if `root` itself cannot be accessed.
pub fn diagram_files(root: &Path) -> Result<Vec<PathBuf>, C4LintError> {
    let metadata = fs::metadata(root)?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let walk = WalkDir::new(root).follow_links(false).sort_by_file_name();
    let files = collect_diagram_files(walk);
    debug!(root:? = root, files = files.len(); "Collected diagram files");
    Ok(files)
}

fn collect_diagram_files(
    entries: impl IntoIterator<Item = walkdir::Result<DirEntry>>,
) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(path:? = err.path(), err:% = err; "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_diagram_file(entry.path()))
        .map(DirEntry::into_path)
        .collect()
}

/// Reads and decodes the diagram at `path`.
///
/// Decode failures are logged with the offending path before they are
/// returned.
pub fn read_document(path: &Path) -> Result<DiagramDocument, C4LintError> {
    let source = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|err| C4LintError::new_read_error(err, &source))?;

    c4lint_parser::decode(&source, &content).map_err(|err| {
        error!(path = source.as_str(), err:% = err; "Error parsing XML file");
        C4LintError::new_decode_error(err, source)
    })
}
