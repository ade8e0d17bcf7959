//! Error types for the gateway
//!
//! This module defines error types for each layer:
//! - `RelayError`: failures at the transport boundary
//! - `AppError`: application layer errors (wraps relay errors for HTTP responses)
//!
//! Upstream non-2xx responses are never errors - they are relayed verbatim.
//! The gateway only synthesizes a response when it cannot complete the relay
//! itself, and that response is always a 500 with a JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures while relaying a request to the backend.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The outbound HTTP call failed (connect, DNS, timeout, read).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Transport failure without an underlying client error.
    #[error("{0}")]
    Connection(String),

    /// The inbound multipart form could not be decoded or re-encoded.
    #[error("invalid multipart form: {0}")]
    Multipart(String),

    /// The inbound request body could not be buffered.
    #[error("failed to read request body: {0}")]
    Body(String),
}

/// Application layer errors - used by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Proxy error: {0}")]
    Relay(#[from] RelayError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Relay(ref cause) = self;
        tracing::error!("Relay failed: {}", cause);

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_envelope_is_500_with_proxy_error_prefix() {
        let err = AppError::Relay(RelayError::Connection("Connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Proxy error: Connection refused");
    }

    #[tokio::test]
    async fn test_multipart_failure_uses_same_envelope() {
        let err = AppError::Relay(RelayError::Multipart("unexpected end of stream".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let message = json["error"].as_str().unwrap();
        assert!(message.starts_with("Proxy error:"));
    }
}
