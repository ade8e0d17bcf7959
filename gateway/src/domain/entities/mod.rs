//! Domain models for the relay

pub mod relay;

pub use relay::{FormPart, InboundRequest, OutboundRequest, RelayBody, RelayedResponse};
