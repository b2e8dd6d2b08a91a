//! Project configuration loading (`gx.toml`).

mod config_dto;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ProjectConfig};

use config_dto::ProjectConfigDto;

/// Parse and validate project configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let dto: ProjectConfigDto = toml::from_str(content)?;
    ProjectConfig::try_from(dto)
}

/// Load the project configuration at `path`.
pub fn load_config(path: &Path) -> Result<ProjectConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigMissing(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading project config");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
