//! Application layer
//!
//! Services holding the forwarding rules of the gateway.

pub mod relay_service;

pub use relay_service::RelayService;
