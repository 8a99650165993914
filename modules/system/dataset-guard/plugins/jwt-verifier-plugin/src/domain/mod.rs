//! Domain layer for the JWT verifier plugin.

pub mod client;
pub mod service;

pub use service::Service;
