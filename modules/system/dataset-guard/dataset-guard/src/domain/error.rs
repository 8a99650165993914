//! Domain errors for the dataset guard.

use dataset_guard_sdk::{
    ClassifierError, DatasetGuardError, DenyReason, PermissionStoreError, TokenVerifierError,
};

use super::claims::ClaimsError;

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    /// The credential failed verification.
    #[error("token verification failed: {0}")]
    Verification(#[from] TokenVerifierError),

    /// The verified claims were refused.
    #[error("claims refused: {0}")]
    Claims(#[from] ClaimsError),

    /// The permission store lookup failed.
    #[error("permission lookup failed: {0}")]
    Store(#[from] PermissionStoreError),

    /// The dataset classification lookup failed.
    #[error("classification failed: {0}")]
    Classifier(#[from] ClassifierError),

    /// A resolved permission string did not parse. Permission sources
    /// are pre-validated, so this is corruption, not a user mistake.
    #[error("invalid permission grant '{value}'")]
    InvalidGrant {
        /// The grant string that did not parse.
        value: String,
    },

    /// The request was evaluated and refused.
    #[error("denied: {reason}")]
    Denied {
        /// Why the request was refused.
        reason: DenyReason,
    },

    /// An interactive caller presented no user credential.
    #[error("user credentials unavailable")]
    UserCredentialsUnavailable,
}

impl From<DomainError> for DatasetGuardError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Verification(TokenVerifierError::InvalidToken(_))
            | DomainError::Claims(_) => Self::Forbidden {
                reason: DenyReason::InvalidCredential,
            },
            DomainError::Verification(TokenVerifierError::Unavailable(reason))
            | DomainError::Store(PermissionStoreError::Unavailable(reason))
            | DomainError::Classifier(ClassifierError::Unavailable(reason)) => {
                Self::Internal(reason)
            }
            DomainError::Classifier(ClassifierError::NotFound { domain, dataset }) => {
                Self::DatasetNotFound { domain, dataset }
            }
            DomainError::InvalidGrant { .. } => Self::Forbidden {
                reason: DenyReason::MalformedPermissions,
            },
            DomainError::Denied { reason } => Self::Forbidden { reason },
            DomainError::UserCredentialsUnavailable => Self::UserCredentialsUnavailable,
        }
    }
}
