//! Backend HTTP transport implementation

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::Config;
use crate::domain::entities::{FormPart, OutboundRequest, RelayBody, RelayedResponse};
use crate::domain::ports::BackendTransport;
use crate::error::RelayError;

/// HTTP transport to the backend origin.
///
/// One client instance is shared across all in-flight relayed requests;
/// `reqwest` pools connections internally, so no further synchronization is
/// needed here.
pub struct HttpBackend {
    http: Client,
}

impl HttpBackend {
    /// Build the shared client with the configured connect/read timeouts.
    pub fn new(config: &Config) -> Result<Self, RelayError> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl BackendTransport for HttpBackend {
    async fn send(&self, request: OutboundRequest) -> Result<RelayedResponse, RelayError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);

        builder = match request.body {
            RelayBody::Empty => builder,
            RelayBody::Raw(bytes) => builder.body(bytes),
            // reqwest generates the Content-Type (boundary included) for the
            // re-encoded form.
            RelayBody::Multipart(parts) => builder.multipart(encode_form(parts)?),
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                RelayError::Connection(e.to_string())
            } else {
                RelayError::Request(e)
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RelayedResponse {
            status,
            headers,
            body,
        })
    }
}

/// Re-encode decoded multipart parts as an outbound `reqwest` form.
fn encode_form(parts: Vec<FormPart>) -> Result<Form, RelayError> {
    let mut form = Form::new();

    for part in parts {
        match part {
            FormPart::File {
                name,
                filename,
                content_type,
                data,
            } => {
                let mut file_part = Part::bytes(data.to_vec()).file_name(filename);
                if let Some(mime) = content_type {
                    file_part = file_part
                        .mime_str(&mime)
                        .map_err(|e| RelayError::Multipart(e.to_string()))?;
                }
                form = form.part(name, file_part);
            }
            FormPart::Field { name, value } => {
                form = form.text(name, value);
            }
        }
    }

    Ok(form)
}
