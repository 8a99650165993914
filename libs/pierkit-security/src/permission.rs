use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::action::{Action, AdminAction, DataAction};
use crate::sensitivity::SensitivityLevel;

/// The sensitivity tier a data permission is issued at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PermissionTier {
    /// Grants the action for datasets classified at this level or below.
    Level(SensitivityLevel),
    /// Grants the action regardless of classification.
    All,
}

impl PermissionTier {
    /// Wire name of the tier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Level(level) => level.as_str(),
            Self::All => "ALL",
        }
    }
}

impl fmt::Display for PermissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A granted capability in the flat wire format used by client grants and
/// token scopes.
///
/// Wire forms are `<ACTION>_<LEVEL>` (`READ_PUBLIC`, `WRITE_PROTECTED`),
/// `<ACTION>_ALL` (`READ_ALL`) and the standalone admin names
/// (`USER_ADMIN`, `DATA_ADMIN`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Permission {
    /// A data action issued at a tier.
    Data {
        /// The granted action.
        action: DataAction,
        /// The tier it was issued at.
        tier: PermissionTier,
    },
    /// A standalone administrative capability.
    Admin(AdminAction),
}

impl Permission {
    // ── Constructors ────────────────────────────────────────────────

    /// A data permission at the given tier.
    #[must_use]
    pub fn data(action: DataAction, tier: PermissionTier) -> Self {
        Self::Data { action, tier }
    }

    /// A data permission issued at a specific sensitivity level.
    #[must_use]
    pub fn at_level(action: DataAction, level: SensitivityLevel) -> Self {
        Self::Data {
            action,
            tier: PermissionTier::Level(level),
        }
    }

    /// A data permission at the `ALL` tier.
    #[must_use]
    pub fn all(action: DataAction) -> Self {
        Self::Data {
            action,
            tier: PermissionTier::All,
        }
    }

    /// An admin permission.
    #[must_use]
    pub fn admin(action: AdminAction) -> Self {
        Self::Admin(action)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data { action, tier } => write!(f, "{action}_{tier}"),
            Self::Admin(action) => f.write_str(action.as_str()),
        }
    }
}

/// The input was not a well-formed permission name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognised permission '{value}'")]
pub struct ParsePermissionError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePermissionError {
            value: s.to_owned(),
        };
        match s {
            "USER_ADMIN" => Ok(Self::Admin(AdminAction::UserAdmin)),
            "DATA_ADMIN" => Ok(Self::Admin(AdminAction::DataAdmin)),
            _ => {
                let (action, tier) = s.split_once('_').ok_or_else(malformed)?;
                let action = match action {
                    "READ" => DataAction::Read,
                    "WRITE" => DataAction::Write,
                    _ => return Err(malformed()),
                };
                let tier = match tier {
                    "ALL" => PermissionTier::All,
                    level => PermissionTier::Level(level.parse().map_err(|_| malformed())?),
                };
                Ok(Self::Data { action, tier })
            }
        }
    }
}

/// A path-scoped grant in the format carried by user groups:
/// `<ACTION>/<domain>/<dataset>`.
///
/// Unlike [`Permission`], the action here has no tier. The grant applies
/// to exactly one dataset path and the action may also be an admin name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupPermission {
    action: Action,
    domain: String,
    dataset: String,
}

impl GroupPermission {
    /// Create a path-scoped grant.
    #[must_use]
    pub fn new(action: Action, domain: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            action,
            domain: domain.into(),
            dataset: dataset.into(),
        }
    }

    /// The granted action.
    #[inline]
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// The domain segment of the grant path.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The dataset segment of the grant path.
    #[inline]
    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// Whether this entry grants `action` on exactly `(domain, dataset)`.
    #[must_use]
    pub fn grants(&self, action: Action, domain: &str, dataset: &str) -> bool {
        self.action == action && self.domain == domain && self.dataset == dataset
    }
}

impl fmt::Display for GroupPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.action, self.domain, self.dataset)
    }
}

/// The input was not a well-formed `<ACTION>/<domain>/<dataset>` grant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognised group permission '{value}'")]
pub struct ParseGroupPermissionError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for GroupPermission {
    type Err = ParseGroupPermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseGroupPermissionError {
            value: s.to_owned(),
        };
        let mut parts = s.split('/');
        let (Some(action), Some(domain), Some(dataset), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if domain.is_empty() || dataset.is_empty() {
            return Err(malformed());
        }
        let action = action.parse().map_err(|_| malformed())?;
        Ok(Self {
            action,
            domain: domain.to_owned(),
            dataset: dataset.to_owned(),
        })
    }
}
