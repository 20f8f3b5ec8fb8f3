//! Configuration module
//!
//! Handles CLI configuration such as the service URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Repoforge service
    pub server_url: String,
}
