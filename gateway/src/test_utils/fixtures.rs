//! Test fixtures

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method, StatusCode};

use crate::domain::entities::{InboundRequest, RelayBody, RelayedResponse};

/// 200 with no headers and an empty body.
pub fn empty_ok_response() -> RelayedResponse {
    RelayedResponse {
        status: StatusCode::OK,
        headers: HeaderMap::new(),
        body: Bytes::new(),
    }
}

/// Backend response with the given status and a JSON body.
pub fn json_response(status: StatusCode, body: &str) -> RelayedResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    RelayedResponse {
        status,
        headers,
        body: Bytes::copy_from_slice(body.as_bytes()),
    }
}

/// Bodyless inbound request with no headers.
pub fn inbound_request(method: Method, path: &str, query: Option<&str>) -> InboundRequest {
    InboundRequest {
        method,
        path: path.to_string(),
        query: query.map(str::to_string),
        headers: HeaderMap::new(),
        body: RelayBody::Empty,
    }
}
