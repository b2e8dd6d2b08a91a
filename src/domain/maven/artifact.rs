use std::fmt;

use crate::domain::AppError;
use crate::domain::validation::require_not_blank;

/// Coordinates of a Maven artifact.
///
/// Guarantees:
/// - `group` is not blank
/// - `id` is not blank
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group: String,
    id: String,
}

impl Artifact {
    pub fn new(group: impl Into<String>, id: impl Into<String>) -> Result<Self, AppError> {
        let group = group.into();
        let id = id.into();
        require_not_blank(&group, "The group ID is blank!")?;
        require_not_blank(&id, "The artifact ID is blank!")?;
        Ok(Self { group, id })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `group:id`
    pub fn module_name(&self) -> String {
        format!("{}:{}", self.group, self.id)
    }

    /// `group:id:version`
    pub fn module_name_versioned(&self, version: &str) -> Result<String, AppError> {
        let version = require_not_blank(version, "The version is blank!")?;
        Ok(format!("{}:{}:{}", self.group, self.id, version))
    }

    /// `id:version`
    pub fn name(&self, version: &str) -> Result<String, AppError> {
        let version = require_not_blank(version, "The version is blank!")?;
        Ok(format!("{}:{}", self.id, version))
    }

    /// Ad-hoc YAML snippet describing the artifact at `version`.
    pub fn metadata_yml(&self, version: &str) -> Result<String, AppError> {
        let version = require_not_blank(version, "The version is blank!")?;
        Ok(format!(
            "repository:\n groupId: '{}'\n artifactId: '{}'\nversion: '{}'",
            self.group, self.id, version
        ))
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Artifact({}/{})", self.group, self.id)
    }
}
