//! Relay handlers
//!
//! Endpoints for the two proxied path classes. Each handler reduces the
//! request to its domain representation, hands it to the relay service, and
//! rebuilds an HTTP response from whatever came back.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Uri},
    response::Response,
};

use crate::domain::entities::{FormPart, InboundRequest, RelayBody, RelayedResponse};
use crate::domain::ports::BackendTransport;
use crate::error::{AppError, RelayError};
use crate::AppState;

/// ANY /api/**
///
/// Full method/body relay with the `/api` prefix stripped.
pub async fn relay_api<B: BackendTransport>(
    State(state): State<AppState<B>>,
    request: Request,
) -> Result<Response, AppError> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let headers = request.headers().clone();

    let body = read_body(request, state.max_body_bytes).await?;

    let relayed = state
        .relay
        .relay_api(inbound(method, &uri, headers, body))
        .await?;

    Ok(proxied_response(relayed))
}

/// ANY /uploads/**
///
/// Read-only asset relay; an inbound body, if any, is dropped.
pub async fn relay_upload<B: BackendTransport>(
    State(state): State<AppState<B>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let relayed = state
        .relay
        .relay_upload(inbound(method, &uri, headers, RelayBody::Empty))
        .await?;

    Ok(proxied_response(relayed))
}

fn inbound(method: Method, uri: &Uri, headers: HeaderMap, body: RelayBody) -> InboundRequest {
    InboundRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    }
}

/// Buffer the request body into its relay representation, decoding multipart
/// submissions into file and field parts.
async fn read_body(request: Request, limit: usize) -> Result<RelayBody, RelayError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| RelayError::Multipart(e.to_string()))?;

        let mut parts = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| RelayError::Multipart(e.to_string()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| RelayError::Multipart(e.to_string()))?;
                    parts.push(FormPart::File {
                        name,
                        filename,
                        content_type,
                        data,
                    });
                }
                None => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| RelayError::Multipart(e.to_string()))?;
                    parts.push(FormPart::Field { name, value });
                }
            }
        }

        return Ok(RelayBody::Multipart(parts));
    }

    let bytes = to_bytes(request.into_body(), limit)
        .await
        .map_err(|e| RelayError::Body(e.to_string()))?;

    if bytes.is_empty() {
        Ok(RelayBody::Empty)
    } else {
        Ok(RelayBody::Raw(bytes))
    }
}

/// Rebuild an axum response from the relayed status, headers and body.
fn proxied_response(relayed: RelayedResponse) -> Response {
    let mut response = Response::new(Body::from(relayed.body));
    *response.status_mut() = relayed.status;
    *response.headers_mut() = relayed.headers;
    response
}
