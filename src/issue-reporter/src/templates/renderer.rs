//! Template renderer.

use super::{
    rule, TemplateError, BANNER_TEMPLATE, CREATED_TEMPLATE, FAILED_TEMPLATE,
    MANUAL_INSTRUCTIONS_TEMPLATE,
};
use crate::config::{ReporterConfig, SUMMARY_FILE_NAME};
use crate::credentials::CREDENTIAL_ENV_VARS;
use crate::issues::CreatedIssue;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (output goes to a terminal)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Reports are plain text; error bodies may contain `<`, `&` and quotes
    hbs.register_escape_fn(no_escape);

    // Fail on a missing variable instead of printing an empty field
    hbs.set_strict_mode(true);

    hbs
}

/// Renders the reporter's console output.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the status banner with the issue metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_banner(
        &self,
        config: &ReporterConfig,
        body_length: usize,
    ) -> Result<String, TemplateError> {
        let data = json!({
            "rule": rule(),
            "repository": config.repository().full_name(),
            "title": config.title(),
            "body_length": body_length,
        });

        self.render_template(BANNER_TEMPLATE, &data)
    }

    /// Renders the instructions shown when no token is available.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_manual_instructions(
        &self,
        config: &ReporterConfig,
    ) -> Result<String, TemplateError> {
        let data = json!({
            "rule": rule(),
            "env_vars": CREDENTIAL_ENV_VARS,
            "repository": config.repository().full_name(),
            "title": config.title(),
            "summary_file": SUMMARY_FILE_NAME,
            "labels": config.labels().join(","),
            "program": config.program_name(),
            "new_issue_url": config.repository().new_issue_url(),
        });

        self.render_template(MANUAL_INSTRUCTIONS_TEMPLATE, &data)
    }

    /// Renders the confirmation for a created issue.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_created(&self, issue: &CreatedIssue) -> Result<String, TemplateError> {
        let data = json!({
            "rule": rule(),
            "html_url": issue.html_url,
            "number": issue.number,
            "created_at": issue.created_at,
        });

        self.render_template(CREATED_TEMPLATE, &data)
    }

    /// Renders the failure notice.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_failed(&self, error: &str) -> Result<String, TemplateError> {
        let data = json!({
            "rule": rule(),
            "error": error,
        });

        self.render_template(FAILED_TEMPLATE, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
