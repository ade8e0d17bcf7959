//! HTTP handlers
//!
//! Axum request handlers for the gateway endpoints.

pub mod relay;

pub use relay::{relay_api, relay_upload};
