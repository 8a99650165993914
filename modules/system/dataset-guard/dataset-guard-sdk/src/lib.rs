#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Dataset Guard SDK
//!
//! This crate provides the public API for the `dataset_guard` module:
//!
//! - [`DatasetGuardClient`] - Public API trait for consumers
//! - [`TokenVerifier`], [`PermissionStore`], [`ResourceClassifier`] - Collaborator traits for plugins
//! - [`ProtectionRequest`], [`Credential`] - Request models
//! - [`DatasetGuardError`], [`DenyReason`] - Error types
//!
//! ## Usage
//!
//! Endpoint handlers build a [`ProtectionRequest`] from the incoming
//! call and let the guard decide before touching any data:
//!
//! ```ignore
//! use dataset_guard_sdk::{DatasetGuardClient, ProtectionRequest, RequestOrigin};
//! use pierkit_security::{Action, DataAction};
//!
//! let request = ProtectionRequest::new(
//!     vec![Action::Data(DataAction::Read)],
//!     RequestOrigin::Programmatic,
//! )
//! .with_client_credential(bearer_token)
//! .with_dataset("sales", "orders");
//!
//! guard.protect(request).await?;
//! // the invocation is authorised; serve the endpoint
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::DatasetGuardClient;
pub use error::{ClassifierError, DatasetGuardError, PermissionStoreError, TokenVerifierError};
pub use models::{ClaimsMap, Credential, DenyReason, ProtectionRequest, RequestOrigin};
pub use plugin_api::{PermissionStore, ResourceClassifier, TokenVerifier};
