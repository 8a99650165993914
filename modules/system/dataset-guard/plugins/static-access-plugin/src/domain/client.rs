//! Client implementations for the static access plugin.
//!
//! Implements `PermissionStore` and `ResourceClassifier` using the
//! domain service.

use async_trait::async_trait;
use dataset_guard_sdk::{
    ClassifierError, PermissionStore, PermissionStoreError, ResourceClassifier,
};
use pierkit_security::SensitivityLevel;

use super::service::Service;

#[async_trait]
impl PermissionStore for Service {
    async fn get_permissions(&self, subject: &str) -> Result<Vec<String>, PermissionStoreError> {
        Ok(self.permissions_for(subject))
    }
}

#[async_trait]
impl ResourceClassifier for Service {
    async fn get_sensitivity(
        &self,
        domain: &str,
        dataset: &str,
    ) -> Result<SensitivityLevel, ClassifierError> {
        self.sensitivity_of(domain, dataset)
            .ok_or_else(|| ClassifierError::NotFound {
                domain: domain.to_owned(),
                dataset: dataset.to_owned(),
            })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::StaticAccessPluginConfig;

    fn service() -> Service {
        let cfg: StaticAccessPluginConfig = serde_json::from_value(json!({
            "grants": {"reporting-service": ["READ_ALL"]},
            "datasets": [
                {"domain": "sales", "dataset": "orders", "sensitivity": "PRIVATE"},
            ],
        }))
        .unwrap();
        Service::from_config(&cfg)
    }

    #[tokio::test]
    async fn store_trait_returns_grants() {
        let service = service();
        let store: &dyn PermissionStore = &service;

        let grants = store.get_permissions("reporting-service").await.unwrap();
        assert_eq!(grants, ["READ_ALL"]);
    }

    #[tokio::test]
    async fn store_trait_answers_empty_for_strangers() {
        let service = service();
        let store: &dyn PermissionStore = &service;

        let grants = store.get_permissions("stranger").await.unwrap();
        assert!(grants.is_empty());
    }

    #[tokio::test]
    async fn classifier_trait_returns_the_level() {
        let service = service();
        let classifier: &dyn ResourceClassifier = &service;

        let level = classifier.get_sensitivity("sales", "orders").await.unwrap();
        assert_eq!(level, SensitivityLevel::Private);
    }

    #[tokio::test]
    async fn classifier_trait_reports_unknown_datasets() {
        let service = service();
        let classifier: &dyn ResourceClassifier = &service;

        let result = classifier.get_sensitivity("sales", "refunds").await;
        match result {
            Err(ClassifierError::NotFound { domain, dataset }) => {
                assert_eq!(domain, "sales");
                assert_eq!(dataset, "refunds");
            }
            other => panic!("Expected NotFound, got: {other:?}"),
        }
    }
}
