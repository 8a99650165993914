use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A data-plane action on a dataset. Data actions are sensitivity-scoped:
/// the permission that grants them always carries a tier (`READ_PUBLIC`,
/// `WRITE_ALL`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataAction {
    /// Read dataset contents or metadata.
    Read,
    /// Create or modify dataset contents.
    Write,
}

impl DataAction {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

impl fmt::Display for DataAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An administrative action. Admin actions have no sensitivity dimension;
/// the permission name is the action name itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdminAction {
    /// Manage user accounts and their grants.
    UserAdmin,
    /// Manage domains, datasets and schemas.
    DataAdmin,
}

impl AdminAction {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserAdmin => "USER_ADMIN",
            Self::DataAdmin => "DATA_ADMIN",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action an endpoint can require from its callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Sensitivity-scoped data action.
    Data(DataAction),
    /// Standalone administrative action.
    Admin(AdminAction),
}

impl Action {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data(action) => action.as_str(),
            Self::Admin(action) => action.as_str(),
        }
    }

    /// Returns `true` for administrative actions.
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DataAction> for Action {
    #[inline]
    fn from(action: DataAction) -> Self {
        Self::Data(action)
    }
}

impl From<AdminAction> for Action {
    #[inline]
    fn from(action: AdminAction) -> Self {
        Self::Admin(action)
    }
}

/// The input did not name a known action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown action '{value}'")]
pub struct ParseActionError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Data(DataAction::Read)),
            "WRITE" => Ok(Self::Data(DataAction::Write)),
            "USER_ADMIN" => Ok(Self::Admin(AdminAction::UserAdmin)),
            "DATA_ADMIN" => Ok(Self::Admin(AdminAction::DataAdmin)),
            other => Err(ParseActionError {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("READ".parse::<Action>().unwrap(), Action::Data(DataAction::Read));
        assert_eq!("WRITE".parse::<Action>().unwrap(), Action::Data(DataAction::Write));
        assert_eq!(
            "USER_ADMIN".parse::<Action>().unwrap(),
            Action::Admin(AdminAction::UserAdmin)
        );
        assert_eq!(
            "DATA_ADMIN".parse::<Action>().unwrap(),
            Action::Admin(AdminAction::DataAdmin)
        );
    }

    #[test]
    fn rejects_unknown_and_lowercase_names() {
        assert!("DELETE".parse::<Action>().is_err());
        assert!("read".parse::<Action>().is_err());
        assert!(String::new().parse::<Action>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for name in ["READ", "WRITE", "USER_ADMIN", "DATA_ADMIN"] {
            let action: Action = name.parse().unwrap();
            assert_eq!(action.to_string(), name);
        }
    }

    #[test]
    fn classifies_admin_actions() {
        assert!(Action::Admin(AdminAction::DataAdmin).is_admin());
        assert!(!Action::Data(DataAction::Write).is_admin());
    }
}
