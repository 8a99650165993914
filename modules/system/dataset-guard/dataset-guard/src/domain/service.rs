//! Domain service for the dataset guard.
//!
//! The decision pipeline per invocation: pick the credential, extract
//! typed claims, resolve the granted permissions, match them against
//! the endpoint's requirements. Collaborator failures and refusals
//! surface as [`DomainError`] values; translation to the public
//! taxonomy happens in the local client.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use dataset_guard_sdk::{
    Credential, DenyReason, PermissionStore, ProtectionRequest, RequestOrigin, ResourceClassifier,
    TokenVerifier,
};
use pierkit_security::{AcceptedScopes, Action, GroupPermission, Permission};

use crate::config::DatasetGuardConfig;

use super::claims::{Claims, ClientClaims, SubjectKind, UserClaims};
use super::error::DomainError;

/// Dataset guard service.
///
/// Owns the decision pipeline; the injected collaborators never see
/// the decision itself.
pub struct Service {
    verifier: Arc<dyn TokenVerifier>,
    store: Arc<dyn PermissionStore>,
    classifier: Arc<dyn ResourceClassifier>,
    config: DatasetGuardConfig,
}

impl Service {
    /// Create a service over the given collaborators.
    #[must_use]
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        store: Arc<dyn PermissionStore>,
        classifier: Arc<dyn ResourceClassifier>,
        config: DatasetGuardConfig,
    ) -> Self {
        Self {
            verifier,
            store,
            classifier,
            config,
        }
    }

    /// Decide one endpoint invocation.
    ///
    /// A user credential always wins over a client credential. With no
    /// credential at all, an interactive origin signals the login
    /// redirect; a programmatic origin is refused outright.
    ///
    /// # Errors
    ///
    /// - `Denied` with the specific refusal reason
    /// - `UserCredentialsUnavailable` for interactive callers without a user credential
    /// - Verification, claims, store and classifier failures, each as its own variant
    #[tracing::instrument(
        skip_all,
        fields(
            origin = ?request.origin,
            domain = request.domain.as_deref(),
            dataset = request.dataset.as_deref(),
        )
    )]
    pub async fn protect(&self, request: &ProtectionRequest) -> Result<(), DomainError> {
        let Some((kind, credential)) = select_credential(request) else {
            return match request.origin {
                RequestOrigin::Interactive => Err(DomainError::UserCredentialsUnavailable),
                RequestOrigin::Programmatic => Err(DomainError::Denied {
                    reason: DenyReason::MissingCredentials,
                }),
            };
        };

        let claims_map = self.verifier.verify(credential).await?;
        match Claims::from_map(kind, &claims_map, &self.config)? {
            Claims::User(user) => match_user(
                &user,
                &request.required_actions,
                request.domain.as_deref(),
                request.dataset.as_deref(),
            ),
            Claims::Client(client) => {
                let granted = self.resolve_client_permissions(&client).await?;
                self.match_client(&granted, request).await
            }
        }
    }

    /// Resolve the permissions granted to a client subject.
    ///
    /// Store grants are authoritative when present; the token's own
    /// scopes are the fallback. Either source is parsed strictly: one
    /// unparseable grant refuses the whole request.
    async fn resolve_client_permissions(
        &self,
        claims: &ClientClaims,
    ) -> Result<BTreeSet<Permission>, DomainError> {
        let stored = self.store.get_permissions(&claims.sub).await?;
        let granted = if stored.is_empty() {
            &claims.scopes
        } else {
            debug!(count = stored.len(), "Using store grants over token scopes");
            &stored
        };
        granted
            .iter()
            .map(|value| {
                value.parse::<Permission>().map_err(|_| {
                    warn!(grant = %value, "Refusing unparseable permission grant");
                    DomainError::InvalidGrant {
                        value: value.clone(),
                    }
                })
            })
            .collect()
    }

    /// Match flat client permissions against the endpoint requirements,
    /// classifying the dataset first when the request addresses one.
    async fn match_client(
        &self,
        granted: &BTreeSet<Permission>,
        request: &ProtectionRequest,
    ) -> Result<(), DomainError> {
        let sensitivity = match (&request.domain, &request.dataset) {
            (Some(domain), Some(dataset)) => {
                Some(self.classifier.get_sensitivity(domain, dataset).await?)
            }
            _ => None,
        };
        let accepted = AcceptedScopes::for_actions(&request.required_actions, sensitivity);
        if accepted.satisfied_by(granted) {
            debug!("Client permissions satisfy the endpoint requirements");
            Ok(())
        } else {
            warn!(
                ?sensitivity,
                "Client permissions do not satisfy the endpoint requirements"
            );
            Err(DomainError::Denied {
                reason: DenyReason::InsufficientPermissions,
            })
        }
    }
}

fn select_credential(request: &ProtectionRequest) -> Option<(SubjectKind, &Credential)> {
    if let Some(credential) = &request.user_credential {
        Some((SubjectKind::User, credential))
    } else {
        request
            .client_credential
            .as_ref()
            .map(|credential| (SubjectKind::Client, credential))
    }
}

/// Match user group grants against the endpoint requirements.
///
/// Grant entries that do not parse are skipped; a non-empty grant list
/// with no well-formed entry at all is refused with the distinct
/// malformed-permissions reason. Path matching is exact, and a request
/// addressing only half a dataset path is always refused.
fn match_user(
    claims: &UserClaims,
    required_actions: &[Action],
    domain: Option<&str>,
    dataset: Option<&str>,
) -> Result<(), DomainError> {
    if claims.groups.is_empty() {
        return Err(DomainError::Denied {
            reason: DenyReason::InsufficientPermissions,
        });
    }

    let grants: Vec<GroupPermission> = claims
        .groups
        .iter()
        .filter_map(|entry| entry.parse().ok())
        .collect();
    if grants.is_empty() {
        warn!("User grants contain no well-formed entry");
        return Err(DomainError::Denied {
            reason: DenyReason::MalformedPermissions,
        });
    }

    let allowed = match (domain, dataset) {
        (Some(domain), Some(dataset)) => {
            required_actions.is_empty()
                || required_actions.iter().any(|action| {
                    grants
                        .iter()
                        .any(|grant| grant.grants(*action, domain, dataset))
                })
        }
        (None, None) => required_actions.is_empty(),
        _ => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(DomainError::Denied {
            reason: DenyReason::InsufficientPermissions,
        })
    }
}
