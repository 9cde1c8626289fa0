//! Reporter run configuration.

use crate::config::{
    ConfigError, Repository, DEFAULT_API_URL, DEFAULT_PROGRAM_NAME, ISSUE_LABELS, ISSUE_TITLE,
    TARGET_REPOSITORY,
};
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a single reporting run.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Path to the summary document.
    summary_path: PathBuf,
    /// Repository that receives the issue.
    repository: Repository,
    /// Base URL of the GitHub REST API.
    api_url: Url,
    /// Name shown when telling the user to rerun the program.
    program_name: String,
}

impl ReporterConfig {
    /// Creates a configuration targeting the fixed repository.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the built-in repository or API URL are invalid.
    pub fn new(summary_path: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            summary_path,
            repository: TARGET_REPOSITORY.parse()?,
            api_url: parse_api_url(DEFAULT_API_URL)?,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
        })
    }

    /// Sets a custom API base URL (e.g. GitHub Enterprise).
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Sets the program name shown in the rerun instructions.
    pub fn with_program_name(mut self, program_name: impl Into<String>) -> Self {
        self.program_name = program_name.into();
        self
    }

    /// Returns the summary document path.
    pub fn summary_path(&self) -> &Path {
        &self.summary_path
    }

    /// Returns the target repository.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the program name.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Returns the issue title.
    pub fn title(&self) -> &'static str {
        ISSUE_TITLE
    }

    /// Returns the issue labels.
    pub fn labels(&self) -> &'static [&'static str] {
        &ISSUE_LABELS
    }
}

/// Parses an API base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidApiUrl`] if the value is not an absolute URL.
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidApiUrl {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_target() {
        let config = ReporterConfig::new(PathBuf::from("summary.md")).unwrap();

        assert_eq!(config.repository().full_name(), "showpune/PhotoAlbum-Java");
        assert_eq!(config.api_url().as_str(), "https://api.github.com/");
        assert_eq!(config.title(), "App Modernization Assessment Results");
        assert_eq!(
            config.labels(),
            &["assessment", "modernization", "migration"]
        );
        assert_eq!(config.program_name(), "create-github-issue");
    }

    #[test]
    fn can_override_api_url() {
        let url = Url::parse("https://github.example.com/api/v3").unwrap();
        let config = ReporterConfig::new(PathBuf::from("summary.md"))
            .unwrap()
            .with_api_url(url.clone());

        assert_eq!(config.api_url(), &url);
    }

    #[test]
    fn rejects_relative_api_url() {
        let result = parse_api_url("api.github.com");
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }
}
