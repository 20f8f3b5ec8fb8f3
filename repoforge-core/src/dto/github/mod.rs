//! GitHub create-repository DTOs
//!
//! Bodies exchanged with `POST /user/repos`. Only the fields Repoforge reads
//! are required; everything else is optional so that provider additions never
//! break deserialization.

use serde::{Deserialize, Serialize};

/// Body sent to the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub private: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
}

impl CreateRepoRequest {
    /// Public repository with the given name and description
    pub fn public(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            private: false,
            ..Default::default()
        }
    }
}

/// Successful provider response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRepoResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub owner: RepoOwner,
    #[serde(default)]
    pub permissions: Option<RepoPermissions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub id: Option<i64>,
    pub login: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoPermissions {
    #[serde(rename = "admin", default)]
    pub is_admin: bool,
    #[serde(rename = "pull", default)]
    pub has_pull: bool,
    #[serde(rename = "push", default)]
    pub has_push: bool,
}

/// Error body returned by the provider on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<GithubError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubError {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_request_body() {
        let body = serde_json::to_value(CreateRepoRequest::public("golang-example", "d")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "name": "golang-example", "description": "d", "private": false })
        );
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"id": 123,"name": "golang-example","description":"This is the description","owner":{"login":"jebo87"}}"#;
        let resp: CreateRepoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.id, 123);
        assert_eq!(resp.owner.login, "jebo87");
        assert!(resp.permissions.is_none());
    }

    #[test]
    fn test_error_response_with_validation_errors() {
        let body = r#"{
            "message": "Repository creation failed.",
            "errors": [{"resource": "Repository", "code": "custom", "field": "name", "message": "name already exists on this account"}],
            "documentation_url": "https://docs.github.com/rest/repos/repos#create-a-repository-for-the-authenticated-user"
        }"#;
        let resp: GithubErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.message, "Repository creation failed.");
        assert_eq!(resp.errors[0].field, "name");
    }
}
