//! Server configuration
//!
//! Defines all configurable parameters for the service including the provider
//! credential, the provider endpoint and the batch concurrency bound.

use std::time::Duration;

use repoforge_client::GITHUB_API_URL;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Credential sent to the provider on every creation
    pub github_access_token: String,

    /// Provider API base URL (e.g., "https://api.github.com")
    pub github_api_url: String,

    /// Maximum number of provider calls in flight within one batch
    ///
    /// Each batch gets its own bound; concurrent batches do not share it.
    pub max_concurrent_creations: usize,

    /// Timeout applied to each provider call
    pub provider_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(github_access_token: String) -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            github_access_token,
            github_api_url: GITHUB_API_URL.to_string(),
            max_concurrent_creations: 16,
            provider_timeout: Duration::from_secs(30),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - GITHUB_ACCESS_TOKEN (required)
    /// - GITHUB_API_URL (optional, default: https://api.github.com)
    /// - REPOFORGE_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - MAX_CONCURRENT_CREATIONS (optional, default: 16)
    /// - PROVIDER_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let github_access_token = std::env::var("GITHUB_ACCESS_TOKEN")
            .map_err(|_| anyhow::anyhow!("GITHUB_ACCESS_TOKEN environment variable not set"))?;

        let mut config = Self::new(github_access_token);

        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            config.github_api_url = url;
        }

        if let Ok(addr) = std::env::var("REPOFORGE_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Some(limit) = std::env::var("MAX_CONCURRENT_CREATIONS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            config.max_concurrent_creations = limit;
        }

        if let Some(timeout) = std::env::var("PROVIDER_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.provider_timeout = Duration::from_secs(timeout);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.github_access_token.trim().is_empty() {
            anyhow::bail!("github_access_token cannot be empty");
        }

        if !self.github_api_url.starts_with("http://")
            && !self.github_api_url.starts_with("https://")
        {
            anyhow::bail!("github_api_url must start with http:// or https://");
        }

        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.max_concurrent_creations == 0 {
            anyhow::bail!("max_concurrent_creations must be greater than 0");
        }

        if self.provider_timeout.is_zero() {
            anyhow::bail!("provider_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new("token".to_string());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert_eq!(config.max_concurrent_creations, 16);
        assert_eq!(config.provider_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("token".to_string());

        // Empty token should fail
        config.github_access_token = "  ".to_string();
        assert!(config.validate().is_err());

        config.github_access_token = "token".to_string();

        // Invalid URL should fail
        config.github_api_url = "api.github.com".to_string();
        assert!(config.validate().is_err());

        config.github_api_url = "http://localhost:9000".to_string();
        assert!(config.validate().is_ok());

        // Unbounded fan-out is not allowed
        config.max_concurrent_creations = 0;
        assert!(config.validate().is_err());
    }
}
