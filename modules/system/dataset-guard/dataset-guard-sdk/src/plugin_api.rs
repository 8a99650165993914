//! Collaborator traits for dataset guard implementations.
//!
//! Plugins implement these traits to provide token verification,
//! permission lookup and dataset classification. The guard owns the
//! decision logic and calls collaborators in a fixed order; none of
//! them sees the final decision.

use async_trait::async_trait;

use pierkit_security::SensitivityLevel;

use crate::error::{ClassifierError, PermissionStoreError, TokenVerifierError};
use crate::models::{ClaimsMap, Credential};

/// Verifies bearer credentials and returns their claims.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify a credential and return its verified claim set.
    ///
    /// # Arguments
    ///
    /// * `credential` - The raw bearer credential as presented by the caller
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the credential fails verification for any reason
    /// - `Unavailable` if verification cannot be attempted
    async fn verify(&self, credential: &Credential) -> Result<ClaimsMap, TokenVerifierError>;
}

/// Looks up directly granted permissions for a subject.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Fetch the permission names granted to `subject`.
    ///
    /// Subjects with no grants yield an empty list, not an error.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the store cannot be reached
    async fn get_permissions(&self, subject: &str) -> Result<Vec<String>, PermissionStoreError>;
}

/// Resolves a dataset path to its sensitivity classification.
#[async_trait]
pub trait ResourceClassifier: Send + Sync {
    /// Classify the dataset at `(domain, dataset)`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no dataset is registered under the path
    /// - `Unavailable` if the catalog cannot be reached
    async fn get_sensitivity(
        &self,
        domain: &str,
        dataset: &str,
    ) -> Result<SensitivityLevel, ClassifierError>;
}
