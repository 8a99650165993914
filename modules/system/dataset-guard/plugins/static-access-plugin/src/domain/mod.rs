//! Domain layer for the static access plugin.

pub mod client;
pub mod service;

pub use service::Service;
