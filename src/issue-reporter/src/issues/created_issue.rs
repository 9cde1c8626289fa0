//! Created issue information.

use serde::Deserialize;

/// The tracker's confirmation record for a created issue.
///
/// Only the fields shown to the user are kept; the rest of the response is
/// ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Web URL of the issue.
    pub html_url: String,

    /// Issue number within the repository.
    pub number: u64,

    /// Creation timestamp as reported by GitHub.
    pub created_at: String,
}
