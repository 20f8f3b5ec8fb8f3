//! Batch domain types

use serde::{Deserialize, Serialize};

use crate::domain::repository::CreationResult;

/// Outcome of a batch of creations
///
/// `results` holds exactly one entry per submitted request, in request order.
/// Serialized as `{"status": 206, "result": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub status: u16,
    #[serde(rename = "result")]
    pub results: Vec<CreationResult>,
}

impl BatchResult {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}
