//! Repository API Handlers
//!
//! HTTP endpoints for single and batch repository creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use repoforge_core::domain::batch::BatchResult;
use repoforge_core::domain::repository::{CreationRequest, CreationResult, RepoDescriptor};

use crate::api::AppState;
use crate::api::error::{ApiResult, status_code};

/// POST /repository
/// Create a single repository
pub async fn create_repository(
    State(state): State<AppState>,
    payload: Result<Json<CreationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RepoDescriptor>)> {
    let Json(request) = payload?;
    tracing::info!("Creating repository: {}", request.name);

    match state.repositories.create(&request).await {
        CreationResult::Success(repo) => Ok((StatusCode::CREATED, Json(repo))),
        CreationResult::Failure(err) => Err(err.into()),
    }
}

/// POST /repositories
/// Create a batch of repositories
///
/// The response status is the batch's aggregate status, never a single item's
/// unless every item failed.
pub async fn create_repositories(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreationRequest>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BatchResult>)> {
    let Json(requests) = payload?;
    tracing::info!("Creating {} repositories", requests.len());

    let batch = state.batches.create_batch(requests).await;

    Ok((status_code(batch.status), Json(batch)))
}
