//! Service Module
//!
//! Business logic layer for the server.
//! Services turn creation requests into results and contain domain logic.

pub mod batch;
pub mod repository;

// Re-export for convenience
pub use batch::BatchOrchestrator;
pub use repository::RepositoryService;
