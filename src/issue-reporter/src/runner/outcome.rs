//! Run outcome types.

use crate::issues::CreatedIssue;

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The issue was created.
    Created(CreatedIssue),

    /// No token was available; manual instructions were printed.
    ManualInstructions,

    /// The creation request failed.
    Failed {
        /// HTTP status, when the tracker answered.
        status: Option<u16>,
        /// Error message.
        error: String,
    },
}

impl RunOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Created(_) | Self::ManualInstructions => 0,
            Self::Failed { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failures_exit_unsuccessfully() {
        let created = RunOutcome::Created(CreatedIssue {
            html_url: "https://example.com".to_string(),
            number: 1,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        });

        assert_eq!(created.exit_code(), 0);
        assert_eq!(RunOutcome::ManualInstructions.exit_code(), 0);
        assert_eq!(
            RunOutcome::Failed {
                status: Some(500),
                error: "HTTP 500: oops".to_string()
            }
            .exit_code(),
            1
        );
    }
}
