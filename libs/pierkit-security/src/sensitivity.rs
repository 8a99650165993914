use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sensitivity classification of a dataset.
///
/// Levels are totally ordered, `PUBLIC < PRIVATE < PROTECTED`. A grant
/// issued at level `L` covers every dataset classified at `L` or below,
/// so the grants acceptable for a dataset are the levels from its own
/// classification upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SensitivityLevel {
    /// Visible to any authenticated subject with a read grant.
    Public,
    /// Restricted to explicitly granted subjects.
    Private,
    /// Most restricted classification.
    Protected,
}

impl SensitivityLevel {
    /// All levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Public, Self::Private, Self::Protected];

    /// Wire name of the level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
        }
    }

    /// Levels whose grants cover a dataset classified at this level,
    /// lowest first.
    pub fn accepting_levels(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |level| *level >= self)
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The input did not name a known sensitivity level.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown sensitivity level '{value}'")]
pub struct ParseSensitivityError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for SensitivityLevel {
    type Err = ParseSensitivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            "PROTECTED" => Ok(Self::Protected),
            other => Err(ParseSensitivityError {
                value: other.to_owned(),
            }),
        }
    }
}
