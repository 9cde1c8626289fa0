//! Issue creation payload.

use serde::Serialize;

/// Body of the issue creation request.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRequest {
    /// Issue title.
    pub title: String,

    /// Issue body (the summary document, verbatim).
    pub body: String,

    /// Labels applied on creation.
    pub labels: Vec<String>,
}

impl IssueRequest {
    /// Creates a request with the given title, body and labels.
    #[must_use]
    pub fn new(title: &str, body: String, labels: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            body,
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ISSUE_LABELS, ISSUE_TITLE};
    use serde_json::json;

    #[test]
    fn serializes_fixed_labels() {
        let body = "labels: [\"bug\"]\n\n```json\n{\"labels\": []}\n```".to_string();
        let request = IssueRequest::new(ISSUE_TITLE, body.clone(), &ISSUE_LABELS);

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "App Modernization Assessment Results",
                "body": body,
                "labels": ["assessment", "modernization", "migration"]
            })
        );
    }
}
