//! Client implementation for the JWT verifier plugin.
//!
//! Implements `TokenVerifier` using the domain service.

use async_trait::async_trait;
use dataset_guard_sdk::{ClaimsMap, Credential, TokenVerifier, TokenVerifierError};

use super::service::Service;

#[async_trait]
impl TokenVerifier for Service {
    async fn verify(&self, credential: &Credential) -> Result<ClaimsMap, TokenVerifierError> {
        self.verify_token(credential.expose())
    }
}
