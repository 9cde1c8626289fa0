//! GitHub token resolution.
//!
//! Tokens are looked up in a fixed order of environment variables. A missing
//! token is not an error: the runner falls back to printing manual
//! instructions instead.

use std::fmt;
use tracing::debug;

/// Environment variables checked for a token, highest priority first.
pub const CREDENTIAL_ENV_VARS: [&str; 3] = ["GH_TOKEN", "GITHUB_TOKEN", "INPUT_GITHUB_TOKEN"];

/// An access token authorizing issue creation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: &'static str,
}

impl Credential {
    /// Creates a credential from a token and the variable it came from.
    #[must_use]
    pub fn new(token: impl Into<String>, source: &'static str) -> Self {
        Self {
            token: token.into(),
            source,
        }
    }

    /// Returns the raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the environment variable the token was read from.
    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolves a credential from the process environment.
#[must_use]
pub fn resolve_credential() -> Option<Credential> {
    resolve_credential_with(|name| std::env::var(name).ok())
}

/// Resolves a credential using `lookup` to read variables.
///
/// Returns the first non-empty value in [`CREDENTIAL_ENV_VARS`] order.
pub fn resolve_credential_with<F>(lookup: F) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    for name in CREDENTIAL_ENV_VARS {
        match lookup(name) {
            Some(token) if !token.is_empty() => {
                debug!(variable = name, "Found GitHub token");
                return Some(Credential::new(token, name));
            }
            _ => debug!(variable = name, "No token in variable"),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn resolves_nothing_when_unset() {
        assert_eq!(resolve_credential_with(lookup_from(&[])), None);
    }

    #[test]
    fn resolves_lowest_priority_variable() {
        let credential =
            resolve_credential_with(lookup_from(&[("INPUT_GITHUB_TOKEN", "ci-token")])).unwrap();

        assert_eq!(credential.token(), "ci-token");
        assert_eq!(credential.source(), "INPUT_GITHUB_TOKEN");
    }

    #[test]
    fn first_set_variable_wins() {
        let credential = resolve_credential_with(lookup_from(&[
            ("INPUT_GITHUB_TOKEN", "third"),
            ("GITHUB_TOKEN", "second"),
            ("GH_TOKEN", "first"),
        ]))
        .unwrap();
        assert_eq!(credential.token(), "first");

        let credential = resolve_credential_with(lookup_from(&[
            ("INPUT_GITHUB_TOKEN", "third"),
            ("GITHUB_TOKEN", "second"),
        ]))
        .unwrap();
        assert_eq!(credential.token(), "second");
    }

    #[test]
    fn skips_empty_values() {
        let credential = resolve_credential_with(lookup_from(&[
            ("GH_TOKEN", ""),
            ("GITHUB_TOKEN", "second"),
        ]))
        .unwrap();

        assert_eq!(credential.source(), "GITHUB_TOKEN");
    }

    #[test]
    fn reads_process_environment() {
        temp_env::with_vars(
            [
                ("GH_TOKEN", None),
                ("GITHUB_TOKEN", None),
                ("INPUT_GITHUB_TOKEN", Some("from-env")),
            ],
            || {
                let credential = resolve_credential().unwrap();
                assert_eq!(credential.token(), "from-env");
            },
        );

        temp_env::with_vars(
            [
                ("GH_TOKEN", None::<&str>),
                ("GITHUB_TOKEN", None),
                ("INPUT_GITHUB_TOKEN", None),
            ],
            || assert_eq!(resolve_credential(), None),
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let credential = Credential::new("super-secret", "GH_TOKEN");
        let rendered = format!("{credential:?}");

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("GH_TOKEN"));
    }
}
