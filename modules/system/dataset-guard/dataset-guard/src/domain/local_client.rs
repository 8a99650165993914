//! Local (in-process) client for the dataset guard.

use std::sync::Arc;

use async_trait::async_trait;

use dataset_guard_sdk::{DatasetGuardClient, DatasetGuardError, ProtectionRequest};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct DatasetGuardLocalClient {
    svc: Arc<Service>,
}

impl DatasetGuardLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> DatasetGuardError {
    match &e {
        DomainError::Denied { .. } | DomainError::UserCredentialsUnavailable => {
            tracing::warn!(operation = op, error = %e, "dataset_guard refused the request");
        }
        _ => {
            tracing::error!(operation = op, error = ?e, "dataset_guard call failed");
        }
    }
    e.into()
}

#[async_trait]
impl DatasetGuardClient for DatasetGuardLocalClient {
    async fn protect(&self, request: ProtectionRequest) -> Result<(), DatasetGuardError> {
        self.svc
            .protect(&request)
            .await
            .map_err(|e| log_and_convert("protect", e))
    }
}
