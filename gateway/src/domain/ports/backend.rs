//! Backend transport port
//!
//! Defines the interface for reaching the backend origin.

use async_trait::async_trait;

use crate::domain::entities::{OutboundRequest, RelayedResponse};
use crate::error::RelayError;

/// Transport for outbound requests to the backend origin.
///
/// Implementations must be safe for concurrent use across many in-flight
/// relayed requests. The production implementation talks HTTP via `reqwest`;
/// tests substitute an in-memory mock.
#[async_trait]
pub trait BackendTransport: Send + Sync {
    /// Issue the request and buffer the full response.
    ///
    /// A single attempt per call. Non-2xx upstream statuses are not errors
    /// here - they come back as a regular [`RelayedResponse`].
    async fn send(&self, request: OutboundRequest) -> Result<RelayedResponse, RelayError>;
}
