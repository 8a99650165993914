//! Configuration for the dataset guard.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetGuardConfig {
    /// Resource-server identifier. Token scopes issued as
    /// `<resource_server_id>/<PERMISSION>` are stripped down to the
    /// permission name; URL-shaped scopes for any other server refuse
    /// the credential.
    pub resource_server_id: String,

    /// Claim carrying the user's group permission strings.
    pub groups_claim: String,
}

impl Default for DatasetGuardConfig {
    fn default() -> Self {
        Self {
            resource_server_id: "https://api.datapier.io".to_owned(),
            groups_claim: "cognito:groups".to_owned(),
        }
    }
}
