//! Error types for the dataset guard module.

use thiserror::Error;

use crate::models::DenyReason;

/// Errors that can occur when using the dataset guard API.
#[derive(Debug, Error)]
pub enum DatasetGuardError {
    /// The request was refused.
    #[error("forbidden: {reason}")]
    Forbidden {
        /// Why the request was refused.
        reason: DenyReason,
    },

    /// An interactive caller presented no user credential and must
    /// sign in before retrying.
    #[error("user credentials unavailable")]
    UserCredentialsUnavailable,

    /// The addressed dataset path is not registered in the catalog.
    #[error("dataset not found for domain={domain} and dataset={dataset}")]
    DatasetNotFound {
        /// Domain segment of the addressed path.
        domain: String,
        /// Dataset segment of the addressed path.
        dataset: String,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors raised by [`TokenVerifier`](crate::plugin_api::TokenVerifier)
/// implementations.
#[derive(Debug, Error)]
pub enum TokenVerifierError {
    /// The credential failed verification: bad signature, expired,
    /// wrong issuer or audience, or not parseable at all.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Verification could not be attempted.
    #[error("verifier unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by [`PermissionStore`](crate::plugin_api::PermissionStore)
/// implementations.
#[derive(Debug, Error)]
pub enum PermissionStoreError {
    /// The store could not be reached.
    #[error("permission store unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by [`ResourceClassifier`](crate::plugin_api::ResourceClassifier)
/// implementations.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// No dataset is registered under the given path.
    #[error("dataset not found for domain={domain} and dataset={dataset}")]
    NotFound {
        /// Domain segment of the looked-up path.
        domain: String,
        /// Dataset segment of the looked-up path.
        dataset: String,
    },

    /// The catalog could not be reached.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
