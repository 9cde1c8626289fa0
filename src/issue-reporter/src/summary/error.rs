//! Summary loading error types.

use thiserror::Error;

/// Errors that can occur while loading the summary document.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The summary file does not exist.
    #[error("summary.md not found at {path}")]
    NotFound { path: String },

    /// The summary file exists but could not be read.
    #[error("Failed to read summary '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
