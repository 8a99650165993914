//! Typed claims extraction for the dataset guard.
//!
//! The token verifier hands back an untyped claims map; this module
//! turns it into a [`Claims`] record according to the expected
//! credential kind. Parsing fails closed: a claim with the wrong shape
//! refuses the credential instead of degrading to an empty grant.

use serde_json::Value;
use thiserror::Error;

use dataset_guard_sdk::ClaimsMap;

use crate::config::DatasetGuardConfig;

/// The kind of subject a credential is expected to name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectKind {
    /// End user, authenticated interactively.
    User,
    /// Registered service client.
    Client,
}

/// Typed claims extracted from a verified credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Claims {
    /// Claims of a service client.
    Client(ClientClaims),
    /// Claims of an end user.
    User(UserClaims),
}

impl Claims {
    /// Parse a verified claims map for the expected subject kind.
    ///
    /// # Errors
    ///
    /// - [`ClaimsError::MissingSubject`] for a client credential without a usable `sub`
    /// - [`ClaimsError::MissingGroups`] for a user credential without the groups claim
    /// - The malformed-claim variants when a present claim has the wrong shape
    pub fn from_map(
        kind: SubjectKind,
        claims: &ClaimsMap,
        config: &DatasetGuardConfig,
    ) -> Result<Self, ClaimsError> {
        match kind {
            SubjectKind::Client => ClientClaims::from_map(claims, config).map(Self::Client),
            SubjectKind::User => UserClaims::from_map(claims, config).map(Self::User),
        }
    }
}

/// Claims of a service client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientClaims {
    /// Subject identifier, used for permission store lookups.
    pub sub: String,
    /// Scope tokens with the resource-server prefix already stripped.
    pub scopes: Vec<String>,
}

impl ClientClaims {
    /// Parse client claims: a non-empty `sub` plus the optional `scope`
    /// claim, split and prefix-stripped.
    ///
    /// # Errors
    ///
    /// - [`ClaimsError::MissingSubject`] when `sub` is missing, null or empty
    /// - [`ClaimsError::InvalidScope`] when a scope addresses another resource server
    /// - [`ClaimsError::MalformedScopeClaim`] when the `scope` claim is not a string
    pub fn from_map(claims: &ClaimsMap, config: &DatasetGuardConfig) -> Result<Self, ClaimsError> {
        let sub = match claims.get("sub") {
            Some(Value::String(sub)) if !sub.is_empty() => sub.clone(),
            _ => return Err(ClaimsError::MissingSubject),
        };
        let scopes = parse_scopes(claims, &config.resource_server_id)?;
        Ok(Self { sub, scopes })
    }
}

/// Claims of an end user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserClaims {
    /// Subject identifier, when the token carries one.
    pub sub: Option<String>,
    /// Group permission strings, verbatim.
    pub groups: Vec<String>,
}

impl UserClaims {
    /// Parse user claims: the groups claim is required, `sub` is kept
    /// when present. An empty groups array is valid claims with zero
    /// grants; the matcher refuses it later.
    ///
    /// # Errors
    ///
    /// - [`ClaimsError::MissingGroups`] when the groups claim is missing or null
    /// - [`ClaimsError::MalformedGroups`] when it is not an array of strings
    pub fn from_map(claims: &ClaimsMap, config: &DatasetGuardConfig) -> Result<Self, ClaimsError> {
        let sub = match claims.get("sub") {
            Some(Value::String(sub)) if !sub.is_empty() => Some(sub.clone()),
            _ => None,
        };
        let groups = parse_groups(claims, &config.groups_claim)?;
        Ok(Self { sub, groups })
    }
}

/// Why a verified claims map was refused.
#[derive(Debug, Error)]
pub enum ClaimsError {
    /// The `sub` claim is missing, null or empty.
    #[error("missing subject claim")]
    MissingSubject,

    /// The groups claim is missing or null. Distinct from an empty
    /// groups array, which is valid claims with zero grants.
    #[error("missing '{claim}' claim")]
    MissingGroups {
        /// The configured groups claim name.
        claim: String,
    },

    /// A scope token is URL-shaped but addresses another resource server.
    #[error("invalid scope field '{scope}'")]
    InvalidScope {
        /// The offending scope token.
        scope: String,
    },

    /// The `scope` claim is present but not a string.
    #[error("scope claim is not a string")]
    MalformedScopeClaim,

    /// The groups claim is present but not an array of strings.
    #[error("'{claim}' claim is not an array of strings")]
    MalformedGroups {
        /// The configured groups claim name.
        claim: String,
    },
}

/// Split the `scope` claim on whitespace and strip the resource-server
/// prefix from each token. A missing or null claim is an empty scope
/// list.
fn parse_scopes(claims: &ClaimsMap, resource_server: &str) -> Result<Vec<String>, ClaimsError> {
    let raw = match claims.get("scope") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(ClaimsError::MalformedScopeClaim),
    };
    let prefix = format!("{resource_server}/");
    raw.split_whitespace()
        .map(|token| {
            if let Some(stripped) = token.strip_prefix(&prefix) {
                // the permission name is the last path segment
                let name = stripped.rsplit('/').next().unwrap_or(stripped);
                Ok(name.to_owned())
            } else if token.contains('/') {
                Err(ClaimsError::InvalidScope {
                    scope: token.to_owned(),
                })
            } else {
                Ok(token.to_owned())
            }
        })
        .collect()
}

fn parse_groups(claims: &ClaimsMap, claim: &str) -> Result<Vec<String>, ClaimsError> {
    let raw = match claims.get(claim) {
        None | Some(Value::Null) => {
            return Err(ClaimsError::MissingGroups {
                claim: claim.to_owned(),
            });
        }
        Some(Value::Array(raw)) => raw,
        Some(_) => {
            return Err(ClaimsError::MalformedGroups {
                claim: claim.to_owned(),
            });
        }
    };
    raw.iter()
        .map(|entry| match entry {
            Value::String(group) => Ok(group.clone()),
            _ => Err(ClaimsError::MalformedGroups {
                claim: claim.to_owned(),
            }),
        })
        .collect()
}
