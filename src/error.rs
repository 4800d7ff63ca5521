//! Error types for the renamer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the renamer.
#[derive(Error, Debug)]
pub enum Error {
    // Parse errors
    #[error("Can't find {0} pattern for {1}")]
    PatternNotFound(&'static str, String),

    // Rename errors
    #[error("Same file:\n{}\n{}", .from.display(), .to.display())]
    SameFile { from: PathBuf, to: PathBuf },

    #[error("Target file already exists: {}", .0.display())]
    TargetExists(PathBuf),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    // Lookup errors
    #[error("Could not find {0}.")]
    ShowNotFound(String),

    #[error("Failed to fetch data: {0}")]
    DownloadError(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error only means the file already carries its new name.
    pub fn is_same_file(&self) -> bool {
        matches!(self, Error::SameFile { .. })
    }
}
