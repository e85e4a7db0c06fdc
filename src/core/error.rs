//! Error type for the merge pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a merge run.
///
/// There is no recovery: the first error stops the run and no output is
/// written unless the failure happens inside the writer itself.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The search root does not exist.
    #[error("Search root not found: {0}")]
    RootNotFound(PathBuf),

    /// The search root exists but cannot be inspected.
    #[error("Failed to access search root {path}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The search root exists but is not a directory.
    #[error("Search root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The search pattern is empty, absolute or not a valid glob.
    #[error("Invalid search pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Directory traversal failed below the root.
    #[error("Failed to walk {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A matched fragment could not be read as text.
    #[error("Failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged output could not be written.
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MergeError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        MergeError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
