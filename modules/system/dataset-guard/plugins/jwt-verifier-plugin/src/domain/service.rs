//! Service implementation for the JWT verifier plugin.

use std::fs;
use std::path::PathBuf;

use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use thiserror::Error;
use tracing::debug;

use dataset_guard_sdk::{ClaimsMap, TokenVerifierError};

use crate::config::{JwksMode, JwtVerifierPluginConfig};

/// Errors raised while building the verifier from configuration.
#[derive(Debug, Error)]
pub enum JwtVerifierSetupError {
    /// The selected mode names no JWKS document.
    #[error("no JWKS document configured for the selected mode")]
    MissingJwks,

    /// The JWKS file could not be read.
    #[error("failed to read JWKS file '{}': {source}", path.display())]
    UnreadableJwksFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JWKS document is not valid JSON.
    #[error("failed to parse JWKS document: {0}")]
    InvalidJwks(#[from] serde_json::Error),

    /// The JWKS document carries no keys at all.
    #[error("JWKS document contains no keys")]
    EmptyJwks,

    /// A key in the document cannot be used for verification.
    #[error("unsupported key in JWKS document: {0}")]
    UnsupportedKey(jsonwebtoken::errors::Error),
}

struct VerificationKey {
    kid: Option<String>,
    algorithm: Option<Algorithm>,
    decoding: DecodingKey,
}

impl VerificationKey {
    fn try_from_jwk(jwk: &Jwk) -> Result<Self, JwtVerifierSetupError> {
        let decoding =
            DecodingKey::from_jwk(jwk).map_err(JwtVerifierSetupError::UnsupportedKey)?;
        let algorithm = jwk
            .common
            .key_algorithm
            .map(|ka| ka.to_string().parse())
            .transpose()
            .map_err(JwtVerifierSetupError::UnsupportedKey)?;

        Ok(Self {
            kid: jwk.common.key_id.clone(),
            algorithm,
            decoding,
        })
    }
}

/// JWT verifier service.
///
/// Holds the decoded verification keys and the expected issuer and
/// audience. Verification is purely local, so an outage mode does not
/// exist; every failure refuses the presented token.
pub struct Service {
    keys: Vec<VerificationKey>,
    issuer: Option<String>,
    audience: Option<String>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JwtVerifierSetupError`] when the JWKS document is
    /// missing, unreadable, empty or carries an unusable key.
    pub fn from_config(cfg: &JwtVerifierPluginConfig) -> Result<Self, JwtVerifierSetupError> {
        let jwks = match cfg.mode {
            JwksMode::Inline => cfg
                .jwks
                .clone()
                .ok_or(JwtVerifierSetupError::MissingJwks)?,
            JwksMode::File => {
                let path = cfg
                    .jwks_file
                    .clone()
                    .ok_or(JwtVerifierSetupError::MissingJwks)?;
                let raw = fs::read_to_string(&path)
                    .map_err(|source| JwtVerifierSetupError::UnreadableJwksFile { path, source })?;
                serde_json::from_str(&raw)?
            }
        };

        Ok(Self {
            keys: load_keys(&jwks)?,
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
        })
    }

    /// Verify a token and return its claims.
    ///
    /// The signing key is selected by the token's `kid` header; a
    /// header without `kid` is accepted only against a single-key set.
    ///
    /// # Errors
    ///
    /// Returns [`TokenVerifierError::InvalidToken`] for any token that
    /// does not verify against the configured keys, issuer and
    /// audience.
    pub fn verify_token(&self, token: &str) -> Result<ClaimsMap, TokenVerifierError> {
        let header = decode_header(token).map_err(invalid)?;
        let key = self.select_key(header.kid.as_deref())?;
        let algorithm = key.algorithm.unwrap_or(header.alg);

        let mut validation = Validation::new(algorithm);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        let data = decode::<ClaimsMap>(token, &key.decoding, &validation).map_err(invalid)?;
        debug!(claims = data.claims.len(), "Token verified");
        Ok(data.claims)
    }

    fn select_key(&self, kid: Option<&str>) -> Result<&VerificationKey, TokenVerifierError> {
        match kid {
            Some(kid) => self
                .keys
                .iter()
                .find(|key| key.kid.as_deref() == Some(kid))
                .ok_or_else(|| {
                    TokenVerifierError::InvalidToken(format!("no key matches kid '{kid}'"))
                }),
            None => match self.keys.as_slice() {
                [only] => Ok(only),
                _ => Err(TokenVerifierError::InvalidToken(
                    "token header carries no key id".to_owned(),
                )),
            },
        }
    }
}

fn load_keys(jwks: &JwkSet) -> Result<Vec<VerificationKey>, JwtVerifierSetupError> {
    if jwks.keys.is_empty() {
        return Err(JwtVerifierSetupError::EmptyJwks);
    }
    jwks.keys.iter().map(VerificationKey::try_from_jwk).collect()
}

fn invalid(e: jsonwebtoken::errors::Error) -> TokenVerifierError {
    TokenVerifierError::InvalidToken(e.to_string())
}
