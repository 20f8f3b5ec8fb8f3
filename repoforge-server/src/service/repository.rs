//! Repository Service
//!
//! Creates a single repository: validates the request, performs one provider
//! call and folds every outcome into a [`CreationResult`].

use std::sync::Arc;

use repoforge_client::RepoProvider;
use repoforge_core::domain::repository::{CreationRequest, CreationResult, RepoDescriptor};
use repoforge_core::dto::github::CreateRepoRequest;

/// Single-item creator
pub struct RepositoryService {
    provider: Arc<dyn RepoProvider>,
    access_token: String,
}

impl RepositoryService {
    pub fn new(provider: Arc<dyn RepoProvider>, access_token: impl Into<String>) -> Self {
        Self {
            provider,
            access_token: access_token.into(),
        }
    }

    /// Create one repository
    ///
    /// A request whose trimmed name is empty fails with 400 without reaching
    /// the provider. Otherwise exactly one provider call is made.
    pub async fn create(&self, request: &CreationRequest) -> CreationResult {
        let name = match request.validate() {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!("Rejecting repository request: {}", err);
                return CreationResult::Failure(err);
            }
        };

        let provider_request =
            CreateRepoRequest::public(name, request.description.clone().unwrap_or_default());

        match self
            .provider
            .create_repo(&self.access_token, &provider_request)
            .await
        {
            Ok(response) => {
                tracing::info!(
                    "Repository created: {}/{} (id {})",
                    response.owner.login,
                    response.name,
                    response.id
                );
                CreationResult::Success(RepoDescriptor {
                    id: response.id,
                    name: response.name,
                    owner: response.owner.login,
                })
            }
            Err(err) => {
                tracing::warn!("Failed to create repository '{}': {}", name, err);
                CreationResult::Failure(err.into_api_error())
            }
        }
    }
}
