//! Error types for Grove
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Soft gaps (missing models, unmatched export patterns, failed previews)
//! are never errors: they are carried as values in the result types.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for Grove operations
pub type GroveResult<T> = Result<T, GroveError>;

/// Main error type for Grove operations
#[derive(Error, Debug)]
pub enum GroveError {
    /// Directory to scan / fill / mirror does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Scene file passed to the export driver does not exist
    #[error("scene file not found: {path}")]
    SceneNotFound { path: PathBuf },

    /// No usable Blender executable
    #[error("blender executable not found (tried {tried}); set GROVE_BLENDER or [blender].path")]
    BlenderNotFound { tried: String },

    /// The host tool ran but reported failure
    #[error("{host} failed: {message}")]
    HostFailed { host: String, message: String },

    /// The host tool produced a report we could not understand
    #[error("invalid host report {path}: {message}")]
    InvalidReport { path: PathBuf, message: String },

    /// Copying a model file failed
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// File system port error (carries the path)
    #[error("{0}")]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
