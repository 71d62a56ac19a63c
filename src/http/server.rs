//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, metrics)
//! - Bind server to listener
//! - Stop gracefully on the shutdown broadcast

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::backend::{BackendClient, ClientBuildError};
use crate::config::AppConfig;
use crate::http::handlers;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

/// HTTP server for the to-do front end.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, ClientBuildError> {
        let backend = BackendClient::new(config.backend.clone())?;
        let state = AppState {
            backend: Arc::new(backend),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/todos", get(handlers::list_todos))
            .route("/api/todo", post(handlers::create_todo))
            .route("/api/todo/", post(handlers::update_todo_without_id))
            .route(
                "/api/todo/{id}",
                get(handlers::get_todo)
                    .post(handlers::update_todo)
                    .delete(handlers::delete_todo),
            )
            .route("/api/todo/toggle/{id}", post(handlers::toggle_todo))
            .route("/api/todo/edit/{id}", get(handlers::edit_fragment))
            .with_state(state)
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Router with all layers, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown broadcast fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn offline_router() -> Router {
        let mut config = AppConfig::default();
        config.backend.base_url = "http://127.0.0.1:1".into();
        HttpServer::new(config).unwrap().router()
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(offline_router(), "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_edit_fragment_needs_no_backend() {
        let response = offline_router()
            .oneshot(
                Request::builder()
                    .uri("/api/todo/edit/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_missing_id_rejected_before_backend() {
        let (status, body) = send(offline_router(), "POST", "/api/todo/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"message":"An error occurred."}"#);
    }

    #[tokio::test]
    async fn test_offline_backend_is_generic_failure() {
        let (status, body) = send(offline_router(), "GET", "/api/todos").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"message":"An error occurred."}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send(offline_router(), "GET", "/api/nothing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
