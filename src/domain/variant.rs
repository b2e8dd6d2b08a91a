use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;
use super::text_case::kebab_case;

/// A release flavour; each derives its published version from the project version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Snapshot,
    Unstable,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Snapshot, Variant::Unstable];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Snapshot => "snapshot",
            Variant::Unstable => "unstable",
        }
    }

    /// Published version for the project `version`.
    pub fn version(&self, version: &str) -> Result<String, AppError> {
        match self {
            Variant::Snapshot => kebab_case(version, &["SNAPSHOT"]),
            Variant::Unstable => Ok(format!("{}u-SNAPSHOT", kebab_case(version, &[])?)),
        }
    }

    /// Whether the README of this variant links the hosted documentation.
    pub fn has_documentation(&self) -> bool {
        matches!(self, Variant::Snapshot)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidVariant(s.to_string()))
    }
}
