//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure is fatal: the run aborts before anything is written.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Root folder does not exist or is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Entry file does not exist: {}", .0.display())]
    MissingEntry(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to walk directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "File changed while hashing: {} (metadata reported {expected} bytes, read {actual})",
        .path.display()
    )]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::ConfigError(err.to_string())
    }
}
