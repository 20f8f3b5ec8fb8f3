//! Batch Service
//!
//! Creates many repositories concurrently and summarizes the outcome.
//!
//! Every request gets its own task. Tasks are all spawned up front and share a
//! semaphore created for that batch alone, which bounds how many of the batch's
//! provider calls are in flight. Batches never share permits. Each task sends
//! exactly one `(index, result)` pair to a single collector task, which stops
//! once it has counted one result per request and places results by index, so
//! `results[i]` always belongs to `requests[i]`.

use std::sync::Arc;

use repoforge_core::domain::batch::BatchResult;
use repoforge_core::domain::error::{
    ApiError, STATUS_CREATED, STATUS_INTERNAL_SERVER_ERROR, STATUS_PARTIAL_CONTENT,
};
use repoforge_core::domain::repository::{CreationRequest, CreationResult};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::service::repository::RepositoryService;

type IndexedResult = (usize, CreationResult);

/// Batch orchestrator
pub struct BatchOrchestrator {
    repositories: Arc<RepositoryService>,
    max_concurrent: usize,
}

impl BatchOrchestrator {
    /// Creates an orchestrator allowing each batch at most `max_concurrent`
    /// provider calls in flight
    ///
    /// The bound applies to every batch separately; concurrent batches do not
    /// compete for the same permits.
    pub fn new(repositories: Arc<RepositoryService>, max_concurrent: usize) -> Self {
        Self {
            repositories,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Create every repository in `requests`
    ///
    /// Never fails as a whole: each item's failure is reported in its own slot.
    pub async fn create_batch(&self, requests: Vec<CreationRequest>) -> BatchResult {
        let total = requests.len();
        info!("Creating batch of {} repositories", total);

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let (tx, rx) = mpsc::channel::<IndexedResult>(total.max(1));
        let collector = tokio::spawn(collect_results(rx, total));

        // Dispatch
        let workers: Vec<JoinHandle<()>> = requests
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                self.spawn_worker(index, request, Arc::clone(&semaphore), tx.clone())
            })
            .collect();
        drop(tx);

        for handle in workers {
            if let Err(e) = handle.await {
                warn!("Creation task panicked: {}", e);
            }
        }

        let slots = collector.await.unwrap_or_else(|e| {
            error!("Batch collector failed: {}", e);
            vec![None; total]
        });

        let results: Vec<CreationResult> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    error!("No result collected for batch item {}", index);
                    CreationResult::Failure(ApiError::internal("repository creation task failed"))
                })
            })
            .collect();

        let status = aggregate_status(&results);
        let batch = BatchResult { status, results };

        info!(
            "Batch completed with status {}: {} created, {} failed",
            batch.status,
            batch.succeeded(),
            batch.failed()
        );

        batch
    }

    /// Spawns the task for one batch item
    ///
    /// The task sends exactly one result, whatever happens inside the creation.
    fn spawn_worker(
        &self,
        index: usize,
        request: CreationRequest,
        semaphore: Arc<Semaphore>,
        tx: mpsc::Sender<IndexedResult>,
    ) -> JoinHandle<()> {
        let repositories = Arc::clone(&self.repositories);

        tokio::spawn(async move {
            let result = match semaphore.acquire_owned().await {
                Ok(_permit) => repositories.create(&request).await,
                Err(e) => {
                    error!("Concurrency limiter closed: {}", e);
                    CreationResult::Failure(ApiError::internal("repository creation task failed"))
                }
            };

            if tx.send((index, result)).await.is_err() {
                warn!("Collector gone before result for batch item {} was sent", index);
            }
        })
    }
}

/// Receives results until one per request has been counted
///
/// Stops early only if every sender is gone, which leaves the missing slots empty.
async fn collect_results(
    mut rx: mpsc::Receiver<IndexedResult>,
    expected: usize,
) -> Vec<Option<CreationResult>> {
    let mut slots: Vec<Option<CreationResult>> = vec![None; expected];
    let mut received = 0;

    while received < expected {
        let Some((index, result)) = rx.recv().await else {
            warn!(
                "Result channel closed after {} of {} results",
                received, expected
            );
            break;
        };

        match slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(result);
                received += 1;
                debug!("Collected result {}/{} (item {})", received, expected, index);
            }
            Some(_) => warn!("Ignoring duplicate result for batch item {}", index),
            None => warn!("Ignoring result for unknown batch item {}", index),
        }
    }

    slots
}

/// Computes the status summarizing a batch
///
/// - every item created: 201
/// - no item created: the status of the first failure
/// - anything else: 206
pub fn aggregate_status(results: &[CreationResult]) -> u16 {
    let succeeded = results.iter().filter(|r| r.is_success()).count();

    if succeeded == results.len() {
        STATUS_CREATED
    } else if succeeded == 0 {
        results
            .iter()
            .find_map(|r| match r {
                CreationResult::Failure(error) => Some(error),
                CreationResult::Success(_) => None,
            })
            .map(ApiError::status)
            .unwrap_or(STATUS_INTERNAL_SERVER_ERROR)
    } else {
        STATUS_PARTIAL_CONTENT
    }
}
