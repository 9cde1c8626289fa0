//! Target repository identifier.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl Repository {
    /// Returns the full name in `owner/name` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// API route that creates issues in this repository.
    #[must_use]
    pub fn issues_route(&self) -> String {
        format!("/repos/{}/{}/issues", self.owner, self.name)
    }

    /// Web page where an issue can be opened by hand.
    #[must_use]
    pub fn new_issue_url(&self) -> String {
        format!("https://github.com/{}/{}/issues/new", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepository {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_owner_and_name() {
        let repo: Repository = "showpune/PhotoAlbum-Java".parse().unwrap();

        assert_eq!(repo.owner, "showpune");
        assert_eq!(repo.name, "PhotoAlbum-Java");
        assert_eq!(repo.full_name(), "showpune/PhotoAlbum-Java");
        assert_eq!(repo.issues_route(), "/repos/showpune/PhotoAlbum-Java/issues");
        assert_eq!(
            repo.new_issue_url(),
            "https://github.com/showpune/PhotoAlbum-Java/issues/new"
        );
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for value in ["", "owner", "/name", "owner/", "a/b/c"] {
            let result = value.parse::<Repository>();
            assert!(
                matches!(result, Err(ConfigError::InvalidRepository { .. })),
                "{value} should be rejected"
            );
        }
    }
}
