//! Repository-related API endpoints

use repoforge_core::domain::batch::BatchResult;
use repoforge_core::domain::error::ApiError;
use repoforge_core::domain::repository::{CreationRequest, RepoDescriptor};

use crate::RepoforgeClient;
use crate::error::{ClientError, Result};

impl RepoforgeClient {
    // =============================================================================
    // Repository Creation
    // =============================================================================

    /// Create a single repository
    ///
    /// # Returns
    /// The created repository, or [`ClientError::Api`] carrying the service's error
    pub async fn create_repository(&self, req: &CreationRequest) -> Result<RepoDescriptor> {
        let url = format!("{}/repository", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Create many repositories in one batch
    ///
    /// A batch in which every item failed is answered with the first failure's
    /// status but still carries the full result list, so the body is decoded
    /// as a [`BatchResult`] whatever the status.
    pub async fn create_repositories(&self, reqs: &[CreationRequest]) -> Result<BatchResult> {
        let url = format!("{}/repositories", self.base_url);
        let response = self.client.post(&url).json(reqs).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if let Ok(batch) = serde_json::from_slice::<BatchResult>(&body) {
            return Ok(batch);
        }

        match serde_json::from_slice::<ApiError>(&body) {
            Ok(err) => Err(ClientError::Api(err)),
            Err(e) if status.is_success() => Err(ClientError::ParseError(format!(
                "Failed to parse batch response: {}",
                e
            ))),
            Err(_) => Err(ClientError::Api(ApiError::new(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ))),
        }
    }
}
