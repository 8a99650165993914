//! Domain models for the dataset guard module.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use pierkit_security::Action;

/// Verified token claims, keyed by claim name.
pub type ClaimsMap = serde_json::Map<String, serde_json::Value>;

/// A bearer credential presented by a caller.
///
/// Wrapped in [`SecretString`] so `Debug` redacts the value automatically.
#[derive(Clone, Debug)]
pub struct Credential(SecretString);

impl Credential {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// The raw token value. Only verifiers should need this.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Credential {
    #[inline]
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for Credential {
    #[inline]
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Where a protected invocation came from.
///
/// The origin decides how a missing user credential is reported:
/// interactive callers are told to sign in, programmatic callers are
/// simply refused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestOrigin {
    /// A person driving an interactive client.
    Interactive,
    /// A machine caller (service integration, scheduled job).
    #[default]
    Programmatic,
}

/// One protection check for an endpoint invocation.
#[derive(Clone, Debug)]
pub struct ProtectionRequest {
    /// Actions the endpoint requires from its callers.
    pub required_actions: Vec<Action>,
    /// Where the invocation came from.
    pub origin: RequestOrigin,
    /// End-user credential, when the caller presented one.
    pub user_credential: Option<Credential>,
    /// Service-client credential. Consulted only when no user
    /// credential is present.
    pub client_credential: Option<Credential>,
    /// Domain segment of the addressed dataset path, if any.
    pub domain: Option<String>,
    /// Dataset segment of the addressed dataset path, if any.
    pub dataset: Option<String>,
}

impl ProtectionRequest {
    /// A request with no credentials and no dataset path.
    #[must_use]
    pub fn new(required_actions: Vec<Action>, origin: RequestOrigin) -> Self {
        Self {
            required_actions,
            origin,
            user_credential: None,
            client_credential: None,
            domain: None,
            dataset: None,
        }
    }

    /// Attach an end-user credential.
    #[must_use]
    pub fn with_user_credential(mut self, credential: impl Into<Credential>) -> Self {
        self.user_credential = Some(credential.into());
        self
    }

    /// Attach a service-client credential.
    #[must_use]
    pub fn with_client_credential(mut self, credential: impl Into<Credential>) -> Self {
        self.client_credential = Some(credential.into());
        self
    }

    /// Address a dataset path.
    #[must_use]
    pub fn with_dataset(mut self, domain: impl Into<String>, dataset: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self.dataset = Some(dataset.into());
        self
    }
}

/// Why a request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// Neither credential was presented.
    MissingCredentials,
    /// The presented credential failed verification or carried
    /// unusable claims.
    InvalidCredential,
    /// The resolved permissions do not cover the endpoint's requirements.
    InsufficientPermissions,
    /// The subject's grants exist but none of them are well formed.
    MalformedPermissions,
}

impl DenyReason {
    /// The denial message as exposed to callers.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingCredentials => "no credentials provided",
            Self::InvalidCredential => "Not enough permissions or access token is missing/invalid",
            Self::InsufficientPermissions => "Not enough permissions to access endpoint",
            Self::MalformedPermissions => "no well-formed permissions found",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pierkit_security::DataAction;

    #[test]
    fn credential_debug_redacts_the_token() {
        let credential = Credential::new("top-secret-token");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("top-secret-token"));
        assert_eq!(credential.expose(), "top-secret-token");
    }

    #[test]
    fn builder_populates_optional_fields() {
        let request = ProtectionRequest::new(
            vec![Action::Data(DataAction::Read)],
            RequestOrigin::Interactive,
        )
        .with_user_credential("user-token")
        .with_dataset("sales", "orders");

        assert_eq!(request.origin, RequestOrigin::Interactive);
        assert!(request.user_credential.is_some());
        assert!(request.client_credential.is_none());
        assert_eq!(request.domain.as_deref(), Some("sales"));
        assert_eq!(request.dataset.as_deref(), Some("orders"));
    }

    #[test]
    fn deny_reason_messages_are_stable() {
        assert_eq!(
            DenyReason::InsufficientPermissions.to_string(),
            "Not enough permissions to access endpoint"
        );
        assert_eq!(
            DenyReason::InvalidCredential.to_string(),
            "Not enough permissions or access token is missing/invalid"
        );
    }
}
