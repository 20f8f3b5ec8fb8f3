//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod repository;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::service::{BatchOrchestrator, RepositoryService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<RepositoryService>,
    pub batches: Arc<BatchOrchestrator>,
}

impl AppState {
    pub fn new(repositories: Arc<RepositoryService>, max_concurrent_creations: usize) -> Self {
        let batches = Arc::new(BatchOrchestrator::new(
            Arc::clone(&repositories),
            max_concurrent_creations,
        ));
        Self {
            repositories,
            batches,
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Repository endpoints
        .route("/repository", post(repository::create_repository))
        .route("/repositories", post(repository::create_repositories))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::repository::tests::{MockProvider, github_repo};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use repoforge_client::ProviderError;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn router(provider: MockProvider) -> Router {
        let repositories = Arc::new(RepositoryService::new(Arc::new(provider), "secret"));
        create_router(AppState::new(repositories, 4))
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(MockProvider::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_repository_created() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_repo()
            .times(1)
            .returning(|_, _| Ok(github_repo(123, "golang-example", "jebo87")));

        let (status, body) = post_json(
            router(provider),
            "/repository",
            r#"{"name":"golang-example","description":"d"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "id": 123, "name": "golang-example", "owner": "jebo87" })
        );
    }

    #[tokio::test]
    async fn test_create_repository_provider_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_repo()
            .times(1)
            .returning(|_, _| Err(ProviderError::rejected(401, "Requires authentication")));

        let (status, body) = post_json(router(provider), "/repository", r#"{"name":"x"}"#).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "status": 401, "message": "Requires authentication" })
        );
    }

    #[tokio::test]
    async fn test_create_repository_invalid_name() {
        let mut provider = MockProvider::new();
        provider.expect_create_repo().times(0);

        let (status, body) = post_json(router(provider), "/repository", r#"{"name":"  "}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid repository name");
    }

    #[tokio::test]
    async fn test_create_repository_invalid_json() {
        let (status, body) =
            post_json(router(MockProvider::new()), "/repository", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "invalid json body");
    }

    #[tokio::test]
    async fn test_create_repositories_partial_content() {
        let mut provider = MockProvider::new();
        provider
            .expect_create_repo()
            .times(1)
            .returning(|_, _| Ok(github_repo(123, "golang-example", "jebo87")));

        let (status, body) = post_json(
            router(provider),
            "/repositories",
            r#"[{"name":""},{"name":"golang-example","description":"d"}]"#,
        )
        .await;

        assert_eq!(status, StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            body,
            json!({
                "status": 206,
                "result": [
                    { "repo": null, "error": { "status": 400, "message": "invalid repository name" } },
                    { "repo": { "id": 123, "name": "golang-example", "owner": "jebo87" }, "error": null }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_create_repositories_all_failed() {
        let mut provider = MockProvider::new();
        provider.expect_create_repo().times(0);

        let (status, body) =
            post_json(router(provider), "/repositories", r#"[{"name":""},{"name":" "}]"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["result"].as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_create_repositories_requires_array() {
        let (status, body) = post_json(
            router(MockProvider::new()),
            "/repositories",
            r#"{"name":"single"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid json body");
    }
}
