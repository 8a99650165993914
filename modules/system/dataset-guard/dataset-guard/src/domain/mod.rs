//! Domain layer for the dataset guard.

pub mod claims;
pub mod error;
pub mod local_client;
pub mod service;


pub use error::DomainError;
pub use local_client::DatasetGuardLocalClient;
pub use service::Service;
