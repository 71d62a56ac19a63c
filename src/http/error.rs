//! Handler errors and their wire representation.
//!
//! Every failure reaches the client as the same generic 500. The variant is
//! kept internally so the cause can be logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::todo::TimeError;

/// Body sent for every failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred.";

/// Reasons a proxied operation can fail.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend could not be reached or the transfer broke.
    #[error("backend request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a status the operation treats as failure.
    #[error("backend returned status {status}")]
    Backend { status: u16 },

    /// The backend body was not what the operation relays.
    #[error("malformed backend response: {0}")]
    Decode(String),

    /// The inbound request could not be turned into a backend call.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl From<TimeError> for ProxyError {
    fn from(e: TimeError) -> Self {
        ProxyError::Validation(e.to_string())
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;

#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Validation(_) => tracing::warn!(error = %self, "Rejected request"),
            _ => tracing::error!(error = %self, "Proxy operation failed"),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: GENERIC_FAILURE_MESSAGE,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    async fn body_of(err: ProxyError) -> (StatusCode, Option<String>, String) {
        let response = err.into_response();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_all_kinds_collapse_to_generic_500() {
        let errors = vec![
            ProxyError::Backend { status: 404 },
            ProxyError::Decode("eof".into()),
            ProxyError::Validation("Id is required".into()),
        ];

        for err in errors {
            let (status, content_type, body) = body_of(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(content_type.as_deref(), Some("application/json"));
            assert_eq!(body, r#"{"message":"An error occurred."}"#);
        }
    }

    #[test]
    fn test_time_error_is_validation() {
        let err: ProxyError = TimeError::Unrecognised("soon".into()).into();
        assert!(matches!(err, ProxyError::Validation(_)));
        assert_eq!(err.to_string(), "invalid request: unrecognised timestamp 'soon'");
    }

    #[test]
    fn test_backend_status_in_message() {
        let err = ProxyError::Backend { status: 503 };
        assert_eq!(err.to_string(), "backend returned status 503");
    }
}
