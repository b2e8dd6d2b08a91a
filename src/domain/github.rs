use std::fmt;

use url::Url;

use super::AppError;
use super::url_path::parse_url;
use super::validation::require_not_blank;

/// A GitHub repository reference.
///
/// Guarantees:
/// - `owner` is not blank
/// - `name` is not blank
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    owner: String,
    name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, AppError> {
        let owner = owner.into();
        let name = name.into();
        require_not_blank(&owner, "The owner is blank!")?;
        require_not_blank(&name, "The name is blank!")?;
        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `https://{owner}.github.io/{name}`
    pub fn pages(&self) -> Result<Url, AppError> {
        parse_url(&format!("https://{}.github.io/{}", self.owner, self.name))
    }

    /// `https://github.com/{owner}/{name}`
    pub fn url(&self) -> Result<Url, AppError> {
        parse_url(&format!("https://github.com/{}/{}", self.owner, self.name))
    }

    /// Ad-hoc YAML snippet describing the repository at `version`.
    pub fn metadata_yml(&self, version: &str) -> Result<String, AppError> {
        let version = require_not_blank(version, "The version is blank!")?;
        Ok(format!(
            "repository:\n owner: '{}'\n name: '{}'\nversion: '{}'",
            self.owner, self.name, version
        ))
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repository({}/{})", self.owner, self.name)
    }
}
