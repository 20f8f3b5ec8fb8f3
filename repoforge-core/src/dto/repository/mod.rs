//! Repository result DTOs

use serde::{Deserialize, Serialize};

use crate::domain::error::ApiError;
use crate::domain::repository::{CreationResult, RepoDescriptor};

/// Wire form of [`CreationResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreationResultDto {
    pub repo: Option<RepoDescriptor>,
    pub error: Option<ApiError>,
}

impl From<CreationResult> for CreationResultDto {
    fn from(result: CreationResult) -> Self {
        match result {
            CreationResult::Success(repo) => Self {
                repo: Some(repo),
                error: None,
            },
            CreationResult::Failure(error) => Self {
                repo: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<CreationResultDto> for CreationResult {
    type Error = String;

    fn try_from(dto: CreationResultDto) -> Result<Self, Self::Error> {
        match (dto.repo, dto.error) {
            (Some(repo), None) => Ok(CreationResult::Success(repo)),
            (None, Some(error)) => Ok(CreationResult::Failure(error)),
            (Some(_), Some(_)) => Err("result carries both a repo and an error".to_string()),
            (None, None) => Err("result carries neither a repo nor an error".to_string()),
        }
    }
}
