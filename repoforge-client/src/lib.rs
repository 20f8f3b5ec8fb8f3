//! Repoforge HTTP Clients
//!
//! This crate holds both HTTP clients of the Repoforge workspace:
//! - [`GithubProvider`]: the remote creation client the server uses to create
//!   repositories on the provider, behind the [`RepoProvider`] trait
//! - [`RepoforgeClient`]: a type-safe client for the Repoforge service API,
//!   used by the CLI
//!
//! # Example
//!
//! ```no_run
//! use repoforge_client::RepoforgeClient;
//! use repoforge_core::domain::repository::CreationRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), repoforge_client::ClientError> {
//!     let client = RepoforgeClient::new("http://localhost:8080");
//!
//!     let repo = client
//!         .create_repository(&CreationRequest::new("golang-example"))
//!         .await?;
//!
//!     println!("Created repository: {}/{}", repo.owner, repo.name);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod provider;
mod repositories;

// Re-export commonly used types
pub use error::{ClientError, ProviderError, Result};
pub use provider::{GITHUB_API_URL, GithubProvider, RepoProvider};

use repoforge_core::domain::error::ApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the Repoforge service API
#[derive(Debug, Clone)]
pub struct RepoforgeClient {
    /// Base URL of the service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl RepoforgeClient {
    /// Create a new service client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the service (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx responses are decoded as an [`ApiError`] body when possible.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let api_error = serde_json::from_str::<ApiError>(&error_text)
                .unwrap_or_else(|_| ApiError::new(status.as_u16(), error_text));
            return Err(ClientError::Api(api_error));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
