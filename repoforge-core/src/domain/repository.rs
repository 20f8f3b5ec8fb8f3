//! Repository domain types

use serde::{Deserialize, Serialize};

use crate::domain::error::ApiError;
use crate::dto::repository::CreationResultDto;

/// Request to create a single repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the trimmed repository name, or a 400 error if nothing is left
    pub fn validate(&self) -> Result<&str, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::bad_request("invalid repository name"));
        }
        Ok(name)
    }
}

/// A repository created by the provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoDescriptor {
    pub id: i64,
    pub name: String,
    pub owner: String,
}

/// Outcome of one creation attempt
///
/// Either a created repository or the error that prevented it, never both.
/// On the wire this is `{"repo": {...} | null, "error": {...} | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CreationResultDto", try_from = "CreationResultDto")]
pub enum CreationResult {
    Success(RepoDescriptor),
    Failure(ApiError),
}

impl CreationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
