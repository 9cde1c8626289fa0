//! GitHub issue creation.
//!
//! This module sends the single issue creation request. Responses are read
//! raw so that a rejection can be reported with its status code and the
//! body GitHub returned, whatever its shape.

mod created_issue;
mod error;
mod request;

pub use created_issue::CreatedIssue;
pub use error::IssueError;
pub use request::IssueRequest;

use crate::config::Repository;
use crate::credentials::Credential;
use http::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use http::Uri;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use octocrab::service::middleware::base_uri::BaseUriLayer;
use octocrab::service::middleware::extra_headers::ExtraHeadersLayer;
use octocrab::{AuthState, Octocrab, OctocrabBuilder};
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Media type requested from the REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// User agent sent with the request.
pub const USER_AGENT_VALUE: &str = concat!("issue-reporter/", env!("CARGO_PKG_VERSION"));

/// Builds a GitHub client authenticated with `credential`.
///
/// The service stack is assembled by hand instead of through
/// `Octocrab::builder()`, so the only headers added to each request are the
/// ones below: `Authorization: token <credential>`, the v3 media type and
/// [`USER_AGENT_VALUE`]. The stack has no retry layer.
///
/// # Errors
///
/// Returns [`IssueError`] if the API URL or token cannot be used in a
/// request, or the TLS connector cannot be configured.
pub fn build_client(credential: &Credential, api_url: &Url) -> Result<Octocrab, IssueError> {
    let base_uri: Uri = api_url.as_str().trim_end_matches('/').parse()?;

    let mut authorization = HeaderValue::from_str(&format!("token {}", credential.token()))?;
    authorization.set_sensitive(true);
    let headers: Vec<(HeaderName, HeaderValue)> = vec![
        (AUTHORIZATION, authorization),
        (ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE)),
        (USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE)),
    ];

    // Explicit provider, so rustls never has to pick one from crate features
    let connector = HttpsConnectorBuilder::new()
        .with_provider_and_webpki_roots(rustls::crypto::aws_lc_rs::default_provider())?
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    OctocrabBuilder::new_empty()
        .with_service(client)
        .with_layer(&BaseUriLayer::new(base_uri))
        .with_layer(&ExtraHeadersLayer::new(Arc::new(headers)))
        .with_auth(AuthState::None)
        .build()
        .map_err(|never| match never {})
}

/// Creates an issue in `repository`.
///
/// Sends exactly one POST request.
///
/// # Errors
///
/// Returns [`IssueError::Rejected`] for any non-2xx response, carrying the
/// status code and raw body. Transport failures and unparseable success
/// bodies are returned as the other variants.
pub async fn submit_issue(
    octocrab: &Octocrab,
    repository: &Repository,
    request: &IssueRequest,
) -> Result<CreatedIssue, IssueError> {
    let span = info_span!("submit_issue", repo = %repository);

    async {
        info!(title = %request.title, "Creating issue");

        let response = octocrab
            ._post(repository.issues_route(), Some(request))
            .await?;
        let status = response.status();
        let body = octocrab.body_to_string(response).await?;
        debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            return Err(IssueError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let issue: CreatedIssue = serde_json::from_str(&body)?;
        info!(issue_number = issue.number, "Issue created successfully");
        Ok(issue)
    }
    .instrument(span)
    .await
}
