use std::path::PathBuf;

use super::github::Repository;
use super::maven::Artifact;

/// File name of the project configuration, relative to the root directory.
pub const CONFIG_FILE: &str = "gx.toml";

/// Validated project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub version: String,
    pub artifact: Artifact,
    pub repository: Repository,
    pub layout: LayoutConfig,
}

/// Optional overrides of the project directory layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Build directory, relative to the project directory.
    pub build_dir: Option<PathBuf>,
    /// README checked by the `check*Readme` tasks, relative to the root directory.
    pub readme: Option<PathBuf>,
}
