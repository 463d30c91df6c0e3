//! Error types for gostrap
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::TargetField;

/// Result type alias for gostrap operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for the scaffolding pipeline.
///
/// Every variant is terminal: the pipeline aborts at the point of failure and
/// leaves whatever was already written on disk.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Workspace root environment variable unset or empty
    #[error("${var} is not set")]
    MissingWorkspace { var: &'static str },

    /// Workspace root points at a path that does not exist
    #[error("{var} does not exist at: {path}")]
    WorkspaceNotFound { var: &'static str, path: PathBuf },

    /// A target field contains characters outside `[a-z0-9-_.]`
    #[error("invalid {field} name '{value}'. Only [a-z0-9-_.] are allowed.")]
    InvalidName { field: TargetField, value: String },

    /// Destination exists and overwrite was not confirmed
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// Asset store has no entry with this name
    #[error("asset not found: {name}")]
    AssetMissing { name: String },

    /// Template rendering was requested for a non-template asset
    #[error("asset '{name}' is not a template (expected a '.template' suffix)")]
    NotATemplate { name: String },

    /// Asset name would resolve outside the destination root
    #[error("asset path '{name}' must be relative and must not contain '..'")]
    UnsafeAssetPath { name: String },

    /// Template body failed to parse or render
    #[error("template error in {name}: {message}")]
    TemplateSyntax { name: String, message: String },

    /// Filesystem failure
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External setup command could not be launched or exited non-zero
    #[error("command `{command}` failed: {message}")]
    ExternalCommandFailed { command: String, message: String },

    /// Configuration file is malformed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl ScaffoldError {
    /// Attach the path being operated on to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
