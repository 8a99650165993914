#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the protect flow
//!
//! These tests verify that:
//! 1. The guard, the JWT verifier and the static access plugin compose
//!    through the SDK traits alone
//! 2. Client token scopes are matched against catalog sensitivity
//! 3. Store grants take precedence over token scopes
//! 4. User group grants are matched against the addressed dataset
//! 5. Failures map onto the public error surface with stable messages

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, EncodingKey, Header, get_current_timestamp};
use serde_json::json;

use dataset_guard::config::DatasetGuardConfig;
use dataset_guard::domain::{DatasetGuardLocalClient, Service};
use dataset_guard_sdk::{
    DatasetGuardClient, DatasetGuardError, DenyReason, ProtectionRequest, RequestOrigin,
};
use jwt_verifier_plugin::{JwtVerifierPluginConfig, Service as JwtVerifierService};
use pierkit_security::{Action, DataAction};
use static_access_plugin::{Service as StaticAccessService, StaticAccessPluginConfig};

const SECRET: &[u8] = b"protect-flow-integration-secret";

/// Build the JWT verifier around a single inline HS256 key.
fn jwt_verifier() -> JwtVerifierService {
    let jwks = json!({
        "keys": [{
            "kty": "oct",
            "alg": "HS256",
            "kid": "it",
            "k": URL_SAFE_NO_PAD.encode(SECRET),
        }]
    });
    let cfg = JwtVerifierPluginConfig {
        jwks: Some(serde_json::from_value(jwks).unwrap()),
        ..JwtVerifierPluginConfig::default()
    };
    JwtVerifierService::from_config(&cfg).unwrap()
}

/// Build the static access plugin with a two-dataset catalog and one
/// subject holding store grants.
fn static_access() -> StaticAccessService {
    let cfg: StaticAccessPluginConfig = serde_json::from_value(json!({
        "grants": {"reporting-service": ["READ_PRIVATE"]},
        "datasets": [
            {"domain": "sales", "dataset": "catalog", "sensitivity": "PUBLIC"},
            {"domain": "sales", "dataset": "orders", "sensitivity": "PRIVATE"},
        ],
    }))
    .unwrap();
    StaticAccessService::from_config(&cfg)
}

async fn protect(request: ProtectionRequest) -> Result<(), DatasetGuardError> {
    let access = Arc::new(static_access());
    let service = Service::new(
        Arc::new(jwt_verifier()),
        access.clone(),
        access,
        DatasetGuardConfig::default(),
    );
    let local = DatasetGuardLocalClient::new(Arc::new(service));

    let client: &dyn DatasetGuardClient = &local;
    client.protect(request).await
}

fn mint_with(claims: &serde_json::Value, secret: &[u8]) -> String {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some("it".to_owned());
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret)).unwrap()
}

fn client_token(sub: &str, scope: &str) -> String {
    mint_with(
        &json!({"sub": sub, "scope": scope, "exp": get_current_timestamp() + 3600}),
        SECRET,
    )
}

fn user_token(groups: &[&str]) -> String {
    mint_with(
        &json!({
            "sub": "user-1",
            "cognito:groups": groups,
            "exp": get_current_timestamp() + 3600,
        }),
        SECRET,
    )
}

fn read_request(domain: &str, dataset: &str) -> ProtectionRequest {
    ProtectionRequest::new(
        vec![Action::Data(DataAction::Read)],
        RequestOrigin::Programmatic,
    )
    .with_dataset(domain, dataset)
}

#[tokio::test]
async fn client_token_reads_a_public_dataset() {
    let request = read_request("sales", "catalog")
        .with_client_credential(client_token("metrics-service", "READ_PUBLIC"));

    protect(request).await.unwrap();
}

#[tokio::test]
async fn client_token_is_refused_on_a_private_dataset() {
    let request = read_request("sales", "orders")
        .with_client_credential(client_token("metrics-service", "READ_PUBLIC"));

    match protect(request).await {
        Err(DatasetGuardError::Forbidden { reason }) => {
            assert_eq!(reason, DenyReason::InsufficientPermissions);
            assert_eq!(
                reason.to_string(),
                "Not enough permissions to access endpoint",
            );
        }
        other => panic!("Expected Forbidden, got: {other:?}"),
    }
}

#[tokio::test]
async fn url_prefixed_scopes_work_end_to_end() {
    let request = read_request("sales", "catalog").with_client_credential(client_token(
        "metrics-service",
        "https://api.datapier.io/READ_PUBLIC",
    ));

    protect(request).await.unwrap();
}

#[tokio::test]
async fn store_grants_take_precedence_over_token_scopes() {
    // The token scope alone stops at PUBLIC; the store grant for this
    // subject reaches PRIVATE.
    let request = read_request("sales", "orders")
        .with_client_credential(client_token("reporting-service", "READ_PUBLIC"));

    protect(request).await.unwrap();
}

#[tokio::test]
async fn user_group_grant_reads_its_dataset() {
    let request = read_request("sales", "orders")
        .with_user_credential(user_token(&["READ/sales/orders"]));

    protect(request).await.unwrap();
}

#[tokio::test]
async fn user_grant_does_not_leak_across_datasets() {
    let request = read_request("sales", "catalog")
        .with_user_credential(user_token(&["READ/sales/orders"]));

    let result = protect(request).await;
    assert!(matches!(
        result,
        Err(DatasetGuardError::Forbidden {
            reason: DenyReason::InsufficientPermissions
        })
    ));
}

#[tokio::test]
async fn a_tampered_token_is_refused() {
    let forged = mint_with(
        &json!({"sub": "metrics-service", "scope": "READ_ALL", "exp": get_current_timestamp() + 3600}),
        b"not-the-signing-secret",
    );
    let request = read_request("sales", "catalog").with_client_credential(forged);

    match protect(request).await {
        Err(DatasetGuardError::Forbidden { reason }) => {
            assert_eq!(reason, DenyReason::InvalidCredential);
            assert_eq!(
                reason.to_string(),
                "Not enough permissions or access token is missing/invalid",
            );
        }
        other => panic!("Expected Forbidden, got: {other:?}"),
    }
}

#[tokio::test]
async fn an_expired_token_is_refused() {
    let stale = mint_with(
        &json!({"sub": "metrics-service", "scope": "READ_ALL", "exp": get_current_timestamp() - 3600}),
        SECRET,
    );
    let request = read_request("sales", "catalog").with_client_credential(stale);

    assert!(matches!(
        protect(request).await,
        Err(DatasetGuardError::Forbidden {
            reason: DenyReason::InvalidCredential
        })
    ));
}

#[tokio::test]
async fn unknown_datasets_surface_as_not_found() {
    let request = read_request("finance", "ledger")
        .with_client_credential(client_token("metrics-service", "READ_ALL"));

    match protect(request).await {
        Err(DatasetGuardError::DatasetNotFound { domain, dataset }) => {
            assert_eq!(domain, "finance");
            assert_eq!(dataset, "ledger");
        }
        other => panic!("Expected DatasetNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn interactive_requests_without_credentials_ask_for_login() {
    let request = ProtectionRequest::new(
        vec![Action::Data(DataAction::Read)],
        RequestOrigin::Interactive,
    );

    let result = protect(request).await;
    assert!(matches!(
        result,
        Err(DatasetGuardError::UserCredentialsUnavailable)
    ));
}
