//! Backend adapter
//!
//! `reqwest`-backed implementation of the backend transport port.

pub mod client;

pub use client::HttpBackend;
