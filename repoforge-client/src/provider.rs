//! Repository provider client
//!
//! The [`RepoProvider`] trait is the seam between Repoforge and the hosting
//! service that actually creates repositories. [`GithubProvider`] is the
//! production implementation backed by the GitHub REST API.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use repoforge_core::dto::github::{CreateRepoRequest, CreateRepoResponse, GithubErrorResponse};
use tracing::{debug, warn};

use crate::error::ProviderError;

/// Default GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

const CREATE_REPO_PATH: &str = "/user/repos";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const REPOFORGE_USER_AGENT: &str = concat!("repoforge/", env!("CARGO_PKG_VERSION"));

/// Capability to create one repository on a provider
///
/// Implementations perform exactly one remote call per invocation and never
/// retry.
#[async_trait]
pub trait RepoProvider: Send + Sync {
    /// Creates a repository using `token` as the caller's credential
    async fn create_repo(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> Result<CreateRepoResponse, ProviderError>;
}

/// GitHub implementation of [`RepoProvider`]
#[derive(Debug, Clone)]
pub struct GithubProvider {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl GithubProvider {
    /// Create a provider talking to `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a provider with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorization_header(token: &str) -> String {
        format!("token {}", token)
    }
}

impl Default for GithubProvider {
    fn default() -> Self {
        Self::new(GITHUB_API_URL)
    }
}

#[async_trait]
impl RepoProvider for GithubProvider {
    async fn create_repo(
        &self,
        token: &str,
        request: &CreateRepoRequest,
    ) -> Result<CreateRepoResponse, ProviderError> {
        let url = format!("{}{}", self.base_url, CREATE_REPO_PATH);
        debug!("Creating repository '{}' via {}", request.name, url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, Self::authorization_header(token))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(USER_AGENT, REPOFORGE_USER_AGENT)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Error trying to create repository '{}': {}", request.name, e);
                ProviderError::Transport(e)
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!("Error reading provider response body: {}", e);
            ProviderError::UnreadableBody(e)
        })?;

        if !status.is_success() {
            let body: GithubErrorResponse =
                serde_json::from_slice(&bytes).map_err(ProviderError::InvalidErrorBody)?;
            debug!(
                "Provider rejected repository '{}' with status {}: {}",
                request.name, status, body.message
            );
            return Err(ProviderError::rejected(status.as_u16(), body.message));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Error when trying to unmarshal successful response: {}", e);
            ProviderError::InvalidSuccessBody(e)
        })
    }
}
