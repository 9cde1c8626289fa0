//! Issue creation error types.

use std::error::Error as _;
use thiserror::Error;

/// Errors that can occur while creating the issue.
///
/// Every variant is treated the same by the runner: the failure is reported
/// and the run exits unsuccessfully.
#[derive(Debug, Error)]
pub enum IssueError {
    /// The tracker answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Transport or client failure.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// A success response that does not describe an issue.
    #[error("Unexpected response from GitHub: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The API base URL is not a valid request URI.
    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(#[from] http::uri::InvalidUri),

    /// The token contains characters not allowed in a header.
    #[error("Token cannot be sent as a header: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// TLS connector configuration failed.
    #[error("TLS configuration error: {0}")]
    Tls(#[from] rustls::Error),
}

impl IssueError {
    /// Returns the HTTP status code, if the tracker answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line description for the console report.
    ///
    /// octocrab's `Display` appends a captured backtrace, so client errors
    /// are described by their cause chain instead.
    #[must_use]
    pub fn summary(&self) -> String {
        let Self::GitHubError(error) = self else {
            return self.to_string();
        };

        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        if causes.is_empty() {
            let rendered = error.to_string();
            let headline = rendered.lines().next().unwrap_or_default();
            format!("GitHub API error: {headline}")
        } else {
            format!("GitHub API error: {}", causes.join(": "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_rejection_details() {
        let error = IssueError::Rejected {
            status: 422,
            body: "Validation Failed".to_string(),
        };

        assert_eq!(error.summary(), "HTTP 422: Validation Failed");
    }

    #[test]
    fn summary_of_bad_url_is_single_line() {
        let error: IssueError = "http://exa mple.com"
            .parse::<http::Uri>()
            .unwrap_err()
            .into();

        assert!(error.summary().starts_with("Invalid API URL"));
        assert!(!error.summary().contains('\n'));
    }
}
