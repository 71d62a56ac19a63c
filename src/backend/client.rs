//! REST client for the to-do backend.
//!
//! # Responsibilities
//! - Build outbound URLs from the configured base URL and path segments
//! - Issue exactly one request per operation
//! - Classify failures into `ProxyError` variants
//!
//! # Design Decisions
//! - No retries: a failed call is reported, never repeated
//! - Update and delete do not inspect the backend status (logged only)
//! - Toggle requires a success status
//! - List and read-one relay the backend bytes untouched after checking they are JSON

use std::time::Duration;

use axum::body::Bytes;
use serde::de::IgnoredAny;
use thiserror::Error;
use url::Url;

use crate::config::BackendConfig;
use crate::http::error::{ProxyError, ProxyResult};
use crate::todo::Todo;

/// Reasons a `BackendClient` cannot be built.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("invalid backend base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("backend base URL '{0}' cannot carry a path")]
    NotABase(String),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the external to-do service.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
    config: BackendConfig,
}

impl BackendClient {
    /// Build a client from the backend section of the configuration.
    pub fn new(config: BackendConfig) -> Result<Self, ClientBuildError> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(ClientBuildError::NotABase(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
            base,
            config,
        })
    }

    /// `{base_url}{path}` or `{base_url}{path}/{id}`.
    ///
    /// The id always lands as exactly one encoded path segment, so `/`, `?`
    /// and `#` inside it cannot reach other backend paths.
    pub fn url(&self, path: &str, id: Option<&str>) -> ProxyResult<Url> {
        if let Some(id) = id {
            if id.is_empty() || id == "." || id == ".." {
                return Err(ProxyError::Validation(format!(
                    "Id '{}' is not a path segment",
                    id
                )));
            }
        }

        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProxyError::Validation("backend base URL has no path".into()))?;
            segments.pop_if_empty();
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// `GET {todos_path}`. Returns the backend JSON as received.
    pub async fn list(&self) -> ProxyResult<Bytes> {
        let url = self.url(&self.config.todos_path, None)?;
        self.fetch_json(url).await
    }

    /// `GET {todos_path}/{id}`. Returns the backend JSON as received.
    pub async fn get(&self, id: &str) -> ProxyResult<Bytes> {
        let url = self.url(&self.config.todos_path, Some(id))?;
        self.fetch_json(url).await
    }

    /// `PUT {todo_path}/{id}` with the record as JSON.
    pub async fn update(&self, id: &str, todo: &Todo) -> ProxyResult<()> {
        let url = self.url(&self.config.todo_path, Some(id))?;
        let response = self.http.put(url.clone()).json(todo).send().await?;
        log_unexpected_status("update", &url, response.status());
        Ok(())
    }

    /// `DELETE {todo_path}/{id}`.
    pub async fn delete(&self, id: &str) -> ProxyResult<()> {
        let url = self.url(&self.config.todo_path, Some(id))?;
        let response = self.http.delete(url.clone()).send().await?;
        log_unexpected_status("delete", &url, response.status());
        Ok(())
    }

    /// `POST {todo_path}` with the record as JSON.
    ///
    /// The response is handed back unread so its body can be streamed.
    pub async fn create(&self, todo: &Todo) -> ProxyResult<reqwest::Response> {
        let url = self.url(&self.config.todo_path, None)?;
        let response = self.http.post(url.clone()).json(todo).send().await?;
        log_unexpected_status("create", &url, response.status());
        Ok(response)
    }

    /// `POST {toggle_todo_path}/{id}`. Any non-success status is an error.
    pub async fn toggle(&self, id: &str) -> ProxyResult<()> {
        let url = self.url(&self.config.toggle_todo_path, Some(id))?;
        let response = self.http.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Backend {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn fetch_json(&self, url: Url) -> ProxyResult<Bytes> {
        let response = self.http.get(url.clone()).send().await?;
        log_unexpected_status("fetch", &url, response.status());
        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| ProxyError::Decode(e.to_string()))?;
        Ok(body)
    }
}

fn log_unexpected_status(operation: &str, url: &Url, status: reqwest::StatusCode) {
    if !status.is_success() {
        tracing::warn!(
            operation = operation,
            url = %url,
            status = status.as_u16(),
            "Backend returned non-success status"
        );
    }
}
