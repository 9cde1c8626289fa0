//! Runner error types.

/// Errors that abort a run before an outcome is reached.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Run configuration is invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Summary document could not be loaded.
    #[error(transparent)]
    Summary(#[from] crate::summary::SummaryError),

    /// Console output could not be rendered.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// Console output could not be written.
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl RunnerError {
    /// Process exit code for a run aborted by this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }
}
