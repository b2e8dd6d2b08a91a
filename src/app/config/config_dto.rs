use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, Artifact, LayoutConfig, ProjectConfig, Repository};
use crate::domain::validation::require_not_blank;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfigDto {
    pub version: String,
    pub maven: MavenDto,
    pub github: GitHubDto,
    pub layout: Option<LayoutDto>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MavenDto {
    pub group: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubDto {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDto {
    pub build_dir: Option<PathBuf>,
    pub readme: Option<PathBuf>,
}

impl TryFrom<ProjectConfigDto> for ProjectConfig {
    type Error = AppError;

    fn try_from(dto: ProjectConfigDto) -> Result<Self, Self::Error> {
        require_not_blank(&dto.version, "The version is blank!")?;
        let layout = dto
            .layout
            .map(|layout| LayoutConfig { build_dir: layout.build_dir, readme: layout.readme })
            .unwrap_or_default();
        Ok(ProjectConfig {
            version: dto.version,
            artifact: Artifact::new(dto.maven.group, dto.maven.id)?,
            repository: Repository::new(dto.github.owner, dto.github.name)?,
            layout,
        })
    }
}
