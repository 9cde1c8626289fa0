#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod credentials;
pub mod issues;
pub mod runner;
pub mod summary;
pub mod templates;

pub use config::{
    parse_api_url, ConfigError, ReporterConfig, Repository, DEFAULT_API_URL, ISSUE_LABELS,
    ISSUE_TITLE, SUMMARY_FILE_NAME, TARGET_REPOSITORY,
};
pub use credentials::{
    resolve_credential, resolve_credential_with, Credential, CREDENTIAL_ENV_VARS,
};
pub use issues::{build_client, submit_issue, CreatedIssue, IssueError, IssueRequest};
pub use runner::{RunOutcome, Runner, RunnerError};
pub use summary::{default_summary_path, load_summary, SummaryDocument, SummaryError};
pub use templates::{TemplateError, TemplateRenderer};
