//! Service implementation for the static access plugin.

use std::collections::HashMap;

use tracing::debug;

use pierkit_security::SensitivityLevel;

use crate::config::StaticAccessPluginConfig;

/// Static access service.
///
/// Answers permission and classification lookups from configuration:
/// - grants: subject name to permission strings
/// - datasets: domain and dataset name to sensitivity level
#[derive(Debug, Clone)]
pub struct Service {
    grants: HashMap<String, Vec<String>>,
    datasets: HashMap<String, HashMap<String, SensitivityLevel>>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticAccessPluginConfig) -> Self {
        let mut datasets: HashMap<String, HashMap<String, SensitivityLevel>> = HashMap::new();
        for entry in &cfg.datasets {
            datasets
                .entry(entry.domain.clone())
                .or_default()
                .insert(entry.dataset.clone(), entry.sensitivity);
        }

        Self {
            grants: cfg.grants.clone(),
            datasets,
        }
    }

    /// Look up the grants held by a subject.
    ///
    /// Unknown subjects hold no grants; this is an answer, not an
    /// error.
    #[must_use]
    pub fn permissions_for(&self, subject: &str) -> Vec<String> {
        let grants = self.grants.get(subject).cloned().unwrap_or_default();
        debug!(subject = %subject, count = grants.len(), "Resolved static grants");
        grants
    }

    /// Look up the sensitivity classification of a dataset.
    #[must_use]
    pub fn sensitivity_of(&self, domain: &str, dataset: &str) -> Option<SensitivityLevel> {
        self.datasets
            .get(domain)
            .and_then(|catalog| catalog.get(dataset))
            .copied()
    }
}
