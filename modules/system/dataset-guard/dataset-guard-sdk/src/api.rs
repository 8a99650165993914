//! Public API trait for the dataset guard.
//!
//! This trait defines the interface that endpoint handlers use to
//! authorise an invocation before touching any data. The guard
//! implements this trait and delegates to its configured collaborators.

use async_trait::async_trait;

use crate::error::DatasetGuardError;
use crate::models::ProtectionRequest;

/// Public API trait for the dataset guard.
///
/// One call decides one endpoint invocation:
///
/// ```ignore
/// let request = ProtectionRequest::new(required_actions, origin)
///     .with_user_credential(token)
///     .with_dataset("sales", "orders");
///
/// guard.protect(request).await?;
/// // the invocation is authorised
/// ```
///
/// # Security
///
/// A user credential always wins over a client credential: when both
/// are presented, only the user credential is evaluated.
#[async_trait]
pub trait DatasetGuardClient: Send + Sync {
    /// Authorise one endpoint invocation.
    ///
    /// Returns `Ok(())` when the caller may proceed.
    ///
    /// # Arguments
    ///
    /// * `request` - The endpoint's requirements plus everything the
    ///   caller presented
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the request is refused, carrying the denial reason
    /// - `UserCredentialsUnavailable` if an interactive caller presented no user credential
    /// - `DatasetNotFound` if the addressed dataset path is not in the catalog
    /// - `Internal` if a collaborator failed unexpectedly
    async fn protect(&self, request: ProtectionRequest) -> Result<(), DatasetGuardError>;
}
