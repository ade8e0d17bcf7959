//! Transient relay representations
//!
//! Nothing in here is persisted: each value lives for the duration of a
//! single proxied request.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

/// A request as received from the browser, reduced to what the relay needs.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Request path as received (e.g. `/api/v1/products`).
    pub path: String,
    /// Raw query string without the leading `?`, if any.
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: RelayBody,
}

/// Request body variants the relay understands.
///
/// The relay is a single code path parametrized over this union; only the
/// outbound encoding differs per variant.
#[derive(Debug, Clone)]
pub enum RelayBody {
    Empty,
    Raw(Bytes),
    Multipart(Vec<FormPart>),
}

/// One decoded part of a multipart form submission.
#[derive(Debug, Clone)]
pub enum FormPart {
    /// A file upload. The original filename survives the relay.
    File {
        name: String,
        filename: String,
        content_type: Option<String>,
        data: Bytes,
    },

    /// A plain form field.
    Field { name: String, value: String },
}

/// The request the gateway issues against the backend origin.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Fully resolved target URL (origin + rewritten path + query).
    pub url: String,
    pub headers: HeaderMap,
    pub body: RelayBody,
}

/// The backend's answer, buffered and ready to hand back to the browser.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}
