//! HTTP clients for external services.

pub mod client;
pub mod error;
pub mod geocode;
