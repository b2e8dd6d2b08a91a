use std::path::Path;

use tempfile::TempDir;

use crate::adapters::FilesystemProject;
use crate::app::AppContext;
use crate::domain::{Artifact, LayoutConfig, ProjectConfig, Repository};

/// Configuration used by command tests.
pub fn sample_config() -> ProjectConfig {
    ProjectConfig {
        version: "0.5.4".to_string(),
        artifact: Artifact::new("com.github.foo", "bar").unwrap(),
        repository: Repository::new("foo", "bar").unwrap(),
        layout: LayoutConfig::default(),
    }
}

/// Temporary project directory with a filesystem-backed context.
pub struct TestProject {
    temp: TempDir,
    ctx: AppContext<FilesystemProject>,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let ctx = AppContext::new(FilesystemProject::new(temp.path().to_path_buf()), sample_config());
        Self { temp, ctx }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn ctx(&self) -> &AppContext<FilesystemProject> {
        &self.ctx
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root().join(relative)).unwrap()
    }
}
