//! Configuration file loading for the CLI
//!
//! The CLI reads an optional TOML configuration file and an optional list
//! of known software system names.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use c4lint::{C4LintError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for C4LintError {
    fn from(err: ConfigError) -> Self {
        C4LintError::Config(err.to_string())
    }
}

/// Relative path of the per-project configuration file.
const LOCAL_CONFIG: &str = "c4lint/config.toml";

/// Configuration files to try when none is named, most specific first: the
/// per-project file, then the user's platform config directory.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "c4lint", "c4lint") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

/// Loads the application configuration.
///
/// A named file must exist. Without one, the first existing file among
/// [`config_candidates`] is used, and defaults apply when there is none.
///
/// # Errors
///
/// Returns `C4LintError::Config` if a named file is missing, or if the
/// chosen file cannot be parsed or holds invalid values.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, C4LintError> {
    if let Some(path) = explicit_path {
        return load_config_file(path.as_ref());
    }

    match config_candidates().into_iter().find(|path| path.is_file()) {
        Some(path) => load_config_file(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Reads and checks one TOML configuration file.
fn load_config_file(path: &Path) -> Result<AppConfig, C4LintError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }
    info!(path = path.display().to_string(); "Loading configuration");

    let content = fs::read_to_string(path)
        .map_err(|err| C4LintError::new_read_error(err, path.display().to_string()))?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    let threshold = config.lint().similarity_threshold();
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ConfigError::Validation(format!(
            "similarity_threshold must be between 0 and 1, got {threshold}"
        ))
        .into());
    }

    Ok(config)
}

/// Read known system names, one per line.
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns `C4LintError::Read` if the file cannot be read.
pub fn load_names(path: impl AsRef<Path>) -> Result<Vec<String>, C4LintError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|err| C4LintError::new_read_error(err, path.display().to_string()))?;

    let names: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    info!(path = path.display().to_string(), names = names.len(); "Loaded known system names");
    Ok(names)
}
