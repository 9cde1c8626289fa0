//! Fixed reporting targets and run configuration.
//!
//! Everything the reporter posts is fixed at compile time: the target
//! repository, the issue title and the label set. Only the summary location
//! and the API endpoint can be changed, and both default to the values used
//! in production.

mod error;
mod reporter;
mod repository;

pub use error::ConfigError;
pub use reporter::{parse_api_url, ReporterConfig};
pub use repository::Repository;

/// Repository that receives the assessment issue.
pub const TARGET_REPOSITORY: &str = "showpune/PhotoAlbum-Java";

/// Title of the created issue.
pub const ISSUE_TITLE: &str = "App Modernization Assessment Results";

/// Labels attached to every created issue.
pub const ISSUE_LABELS: [&str; 3] = ["assessment", "modernization", "migration"];

/// File name of the summary document, resolved next to the executable.
pub const SUMMARY_FILE_NAME: &str = "summary.md";

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Program name shown in the rerun instructions.
pub const DEFAULT_PROGRAM_NAME: &str = "create-github-issue";
