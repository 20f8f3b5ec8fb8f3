//! Repoforge Server
//!
//! HTTP service that creates repositories on the provider, one at a time or
//! in concurrent batches.

use std::sync::Arc;

use anyhow::{Context, Result};
use repoforge_client::GithubProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::service::RepositoryService;

pub mod api;
pub mod config;
pub mod service;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repoforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Repoforge Server...");

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        "Loaded configuration: provider={}, max_concurrent_creations={}",
        config.github_api_url,
        config.max_concurrent_creations
    );

    let http_client = reqwest::Client::builder()
        .timeout(config.provider_timeout)
        .build()
        .context("Failed to build provider HTTP client")?;
    let provider = GithubProvider::with_client(config.github_api_url.clone(), http_client);

    let repositories = Arc::new(RepositoryService::new(
        Arc::new(provider),
        config.github_access_token.clone(),
    ));

    // Build router with all API endpoints
    let app = api::create_router(AppState::new(
        repositories,
        config.max_concurrent_creations,
    ));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
