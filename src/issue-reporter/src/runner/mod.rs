//! Orchestrates a single reporting run.
//!
//! A run is linear: load the summary, print the banner, then either print
//! manual instructions (no token) or submit the issue once and report the
//! result. Nothing is retried.

mod error;
mod outcome;

pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::config::ReporterConfig;
use crate::credentials::{resolve_credential, Credential};
use crate::issues::{build_client, submit_issue, CreatedIssue, IssueError, IssueRequest};
use crate::summary::load_summary;
use crate::templates::TemplateRenderer;
use std::io::Write;
use tracing::{error, info, warn};

/// Runs the reporter against a [`ReporterConfig`].
pub struct Runner {
    config: ReporterConfig,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    #[must_use]
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    /// Executes a run, resolving the token from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_with_credential`].
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunOutcome, RunnerError> {
        self.run_with_credential(resolve_credential(), out).await
    }

    /// Executes a run with an already resolved token.
    ///
    /// Submission failures are reported to `out` and returned as
    /// [`RunOutcome::Failed`].
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the summary cannot be loaded (before any
    /// network activity) or the report cannot be written.
    pub async fn run_with_credential<W: Write>(
        &self,
        credential: Option<Credential>,
        out: &mut W,
    ) -> Result<RunOutcome, RunnerError> {
        let summary = load_summary(self.config.summary_path())?;
        let body_length = summary.char_count();

        write!(out, "{}", self.renderer.render_banner(&self.config, body_length)?)?;

        let Some(credential) = credential else {
            warn!("No GitHub token found, printing manual instructions");
            write!(
                out,
                "{}",
                self.renderer.render_manual_instructions(&self.config)?
            )?;
            return Ok(RunOutcome::ManualInstructions);
        };

        info!(source = credential.source(), "Using GitHub token");
        writeln!(out, "\n🔄 Creating GitHub issue...")?;
        out.flush()?;

        let request = IssueRequest::new(
            self.config.title(),
            summary.into_content(),
            self.config.labels(),
        );

        match self.submit(&credential, &request).await {
            Ok(issue) => {
                write!(out, "{}", self.renderer.render_created(&issue)?)?;
                Ok(RunOutcome::Created(issue))
            }
            Err(e) => {
                error!(error = %e, "Failed to create issue");
                let message = e.summary();
                write!(out, "{}", self.renderer.render_failed(&message)?)?;
                Ok(RunOutcome::Failed {
                    status: e.status(),
                    error: message,
                })
            }
        }
    }

    async fn submit(
        &self,
        credential: &Credential,
        request: &IssueRequest,
    ) -> Result<CreatedIssue, IssueError> {
        let octocrab = build_client(credential, self.config.api_url())?;
        submit_issue(&octocrab, self.config.repository(), request).await
    }
}
