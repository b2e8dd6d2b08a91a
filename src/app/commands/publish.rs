//! Publishing tasks: artifact assembly and README verification per variant.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::url_path::resolve;
use crate::domain::{AppError, Badge, ProjectConfig, TaskContainer, Variant, kebab_case, markdown};
use crate::ports::ProjectLayout;
use crate::services::{CheckReport, FileCheck, assemble};

const BADGE_COLOR: &str = "2962ff";
const README_FILE: &str = "README.md";
const README_REPORT: &str = "reports/analysis/readme/index.html";

/// What a publishing task produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// `libs/{id}-{version}.pom`
    Pom,
    /// `yml/maven-metadata.yml`
    MavenMetadata,
    /// `xml/maven-metadata.xml`
    MavenMetadataXml,
    /// `yml/metadata.yml`
    Metadata,
    /// Verify the README links the published version.
    CheckReadme,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Pom,
        TaskKind::MavenMetadata,
        TaskKind::MavenMetadataXml,
        TaskKind::Metadata,
        TaskKind::CheckReadme,
    ];

    fn name_segments(&self) -> (&'static str, &'static str) {
        match self {
            TaskKind::Pom => ("assemble", "Pom"),
            TaskKind::MavenMetadata => ("assemble", "MavenMetadata"),
            TaskKind::MavenMetadataXml => ("assemble", "MavenMetadataXml"),
            TaskKind::Metadata => ("assemble", "Metadata"),
            TaskKind::CheckReadme => ("check", "Readme"),
        }
    }
}

/// A publishing task bound to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishTask {
    pub variant: Variant,
    pub kind: TaskKind,
}

/// Result of running a publishing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Assembled { kind: TaskKind, path: PathBuf },
    Checked { report: CheckReport },
}

/// Register every task of every variant.
pub fn tasks() -> Result<TaskContainer<PublishTask>, AppError> {
    let mut tasks = TaskContainer::new();
    for variant in Variant::ALL {
        for kind in TaskKind::ALL {
            let (action, subject) = kind.name_segments();
            tasks.create(action, variant.name(), &[subject], PublishTask { variant, kind })?;
        }
    }
    Ok(tasks)
}

/// Run `task` against the project in `ctx`.
pub fn execute<L: ProjectLayout>(
    ctx: &AppContext<L>,
    task: PublishTask,
    now: NaiveDateTime,
) -> Result<TaskOutcome, AppError> {
    let config = ctx.config();
    let layout = ctx.layout();
    let artifact = &config.artifact;
    let version = task.variant.version(&config.version)?;

    let (relative, text) = match task.kind {
        TaskKind::Pom => (
            PathBuf::from("libs").join(format!("{}.pom", kebab_case(artifact.id(), &[version.as_str()])?)),
            artifact.pom(&version, "jar")?,
        ),
        TaskKind::MavenMetadata => {
            (PathBuf::from("yml/maven-metadata.yml"), artifact.metadata_yml(&version)?)
        }
        TaskKind::MavenMetadataXml => {
            (PathBuf::from("xml/maven-metadata.xml"), artifact.metadata(&version, now)?)
        }
        TaskKind::Metadata => {
            (PathBuf::from("yml/metadata.yml"), config.repository.metadata_yml(&version)?)
        }
        TaskKind::CheckReadme => {
            let readme = readme_path(layout, config);
            let report = layout.build_file(Path::new(README_REPORT));
            let check = FileCheck::new().with_expected(readme_expectations(config, task.variant)?);
            let report = check.run(&readme, &report)?;
            return Ok(TaskOutcome::Checked { report });
        }
    };

    let path = layout.build_file(&relative);
    assemble(&path, &text)?;
    info!(variant = %task.variant, path = %path.display(), "assembled {:?}", task.kind);
    Ok(TaskOutcome::Assembled { kind: task.kind, path })
}

/// Lines the README of `variant` must contain.
pub fn readme_expectations(config: &ProjectConfig, variant: Variant) -> Result<Vec<String>, AppError> {
    let version = variant.version(&config.version)?;
    let artifact = &config.artifact;
    let badge = Badge::new("version", version.as_str(), BADGE_COLOR).url()?;

    let mut expected = vec![
        markdown::image("version", &badge)?,
        markdown::link("Maven", &artifact.snapshot_url(&version)?)?,
    ];
    if variant.has_documentation() {
        let documentation = resolve(&config.repository.pages()?, "doc", &[version.as_str()])?;
        expected.push(markdown::link("Documentation", &documentation)?);
    }
    expected.push(format!("implementation(\"{}\")", artifact.module_name_versioned(&version)?));
    Ok(expected)
}

fn readme_path<L: ProjectLayout>(layout: &L, config: &ProjectConfig) -> PathBuf {
    let relative = config.layout.readme.as_deref().unwrap_or(Path::new(README_FILE));
    layout.root_file(relative)
}
