//! Relay service
//!
//! The forwarding rules of the gateway: path rewriting, header filtering and
//! the body mapping for each relayed path class. The service is stateless
//! across requests; the only shared piece is the backend transport.

use std::sync::Arc;

use http::HeaderMap;

use crate::domain::entities::{InboundRequest, OutboundRequest, RelayBody, RelayedResponse};
use crate::domain::ports::BackendTransport;
use crate::error::RelayError;

/// Request headers never copied onto an outbound upload relay.
const UPLOAD_REQUEST_EXCLUDED: &[&str] = &["host", "connection"];

/// Request headers never copied onto an outbound API relay.
const API_REQUEST_EXCLUDED: &[&str] = &[
    "host",
    "connection",
    "content-length",
    "transfer-encoding",
];

/// Response headers never relayed back to the browser.
const RESPONSE_EXCLUDED: &[&str] = &["transfer-encoding", "connection"];

/// Service forwarding browser traffic to the backend origin.
pub struct RelayService<B: BackendTransport> {
    backend: Arc<B>,
    backend_url: String,
}

impl<B: BackendTransport> RelayService<B> {
    pub fn new(backend: Arc<B>, backend_url: String) -> Self {
        Self {
            backend,
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Relay a `/api/**` request with the `/api` prefix stripped once.
    ///
    /// Raw bodies forward unchanged under the API header exclusion set.
    /// Multipart bodies are re-encoded by the transport with a fresh
    /// boundary, and no inbound headers are copied for them - the transport
    /// generates the `Content-Type` itself.
    pub async fn relay_api(&self, inbound: InboundRequest) -> Result<RelayedResponse, RelayError> {
        let path = rewrite_api_path(&inbound.path);
        let url = self.target_url(path, inbound.query.as_deref());

        let headers = match inbound.body {
            RelayBody::Multipart(_) => HeaderMap::new(),
            _ => filter_headers(&inbound.headers, API_REQUEST_EXCLUDED),
        };

        tracing::debug!(method = %inbound.method, target = %url, "Relaying API request");

        let response = self
            .backend
            .send(OutboundRequest {
                method: inbound.method,
                url,
                headers,
                body: inbound.body,
            })
            .await?;

        Ok(filter_response(response))
    }

    /// Relay a `/uploads/**` request with the path unchanged.
    ///
    /// Read-only asset relay: no body is ever forwarded.
    pub async fn relay_upload(
        &self,
        inbound: InboundRequest,
    ) -> Result<RelayedResponse, RelayError> {
        let url = self.target_url(&inbound.path, inbound.query.as_deref());
        let headers = filter_headers(&inbound.headers, UPLOAD_REQUEST_EXCLUDED);

        tracing::debug!(method = %inbound.method, target = %url, "Relaying upload request");

        let response = self
            .backend
            .send(OutboundRequest {
                method: inbound.method,
                url,
                headers,
                body: RelayBody::Empty,
            })
            .await?;

        Ok(filter_response(response))
    }

    /// Resolve the target URL: origin + path, original query appended
    /// verbatim when present.
    fn target_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) => format!("{}{}?{}", self.backend_url, path, q),
            None => format!("{}{}", self.backend_url, path),
        }
    }
}

/// Strip the leading `/api` exactly once. Not recursive: `/api/api/x`
/// forwards as `/api/x`.
pub fn rewrite_api_path(path: &str) -> &str {
    path.strip_prefix("/api").unwrap_or(path)
}

/// Copy headers, skipping the excluded names.
///
/// Header names arrive lowercased, so exclusion sets are written lowercase
/// and matched exactly. Multi-valued headers survive the copy.
pub fn filter_headers(headers: &HeaderMap, excluded: &[&str]) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !excluded.contains(&name.as_str()) {
            filtered.append(name.clone(), value.clone());
        }
    }
    filtered
}

fn filter_response(response: RelayedResponse) -> RelayedResponse {
    let headers = filter_headers(&response.headers, RESPONSE_EXCLUDED);
    RelayedResponse { headers, ..response }
}
