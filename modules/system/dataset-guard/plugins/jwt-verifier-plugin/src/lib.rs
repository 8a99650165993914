#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JWT Verifier Plugin
//!
//! This plugin verifies bearer tokens as JWTs signed by keys from a JWKS
//! document and hands the verified claims back to the dataset guard.
//!
//! ## Modes
//!
//! - **`inline`** (default): The JWKS document is embedded in the plugin
//!   configuration. Useful for tests and fixed-key deployments.
//!
//! - **`file`**: The JWKS document is read from disk at startup, e.g. a
//!   provider's published key set fetched by the deployment tooling.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   jwt_verifier_plugin:
//!     config:
//!       mode: file
//!       jwks_file: "/etc/datapier/jwks.json"
//!       issuer: "https://cognito-idp.eu-west-1.amazonaws.com/eu-west-1_example"
//!       audience: "https://api.datapier.io"
//! ```
//!
//! Signing keys are loaded once at construction; a key rotation requires
//! a restart with the refreshed document.

pub mod config;
pub mod domain;

pub use config::{JwksMode, JwtVerifierPluginConfig};
pub use domain::service::{JwtVerifierSetupError, Service};
