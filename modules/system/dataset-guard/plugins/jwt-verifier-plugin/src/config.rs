//! Configuration for the JWT verifier plugin.

use std::path::PathBuf;

use jsonwebtoken::jwk::JwkSet;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JwtVerifierPluginConfig {
    /// Where the JWKS document comes from.
    pub mode: JwksMode,

    /// Inline JWKS document for `inline` mode.
    pub jwks: Option<JwkSet>,

    /// Path to a JWKS JSON file for `file` mode.
    pub jwks_file: Option<PathBuf>,

    /// Expected `iss` claim. Unchecked when absent.
    pub issuer: Option<String>,

    /// Expected `aud` claim. Unchecked when absent.
    pub audience: Option<String>,
}

impl Default for JwtVerifierPluginConfig {
    fn default() -> Self {
        Self {
            mode: JwksMode::Inline,
            jwks: None,
            jwks_file: None,
            issuer: None,
            audience: None,
        }
    }
}

/// JWKS source mode.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JwksMode {
    /// Take the key set from the `jwks` configuration field.
    #[default]
    Inline,
    /// Read the key set from the file named by `jwks_file`.
    File,
}
