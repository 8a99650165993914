//! Configuration for the static access plugin.

use std::collections::HashMap;

use serde::Deserialize;

use pierkit_security::SensitivityLevel;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticAccessPluginConfig {
    /// Permission grants per subject, as permission name strings.
    pub grants: HashMap<String, Vec<String>>,

    /// The dataset catalog with sensitivity classifications.
    pub datasets: Vec<DatasetEntry>,
}

/// One classified dataset in the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetEntry {
    /// Business domain the dataset belongs to.
    pub domain: String,
    /// Dataset name within the domain.
    pub dataset: String,
    /// Assigned sensitivity classification.
    pub sensitivity: SensitivityLevel,
}
