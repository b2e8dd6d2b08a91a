use std::path::{Path, PathBuf};

use crate::domain::LayoutConfig;
use crate::ports::ProjectLayout;

/// Default build directory, relative to the project directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Filesystem-backed project layout.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
    project: PathBuf,
    build: PathBuf,
}

impl FilesystemProject {
    /// Single-project layout rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        let build = root.join(DEFAULT_BUILD_DIR);
        Self { project: root.clone(), root, build }
    }

    /// Layout for a sub-project at `project`, relative to `root`.
    pub fn with_project_dir(mut self, project: &Path) -> Self {
        self.project = self.root.join(project);
        self.build = self.project.join(DEFAULT_BUILD_DIR);
        self
    }

    /// Override the build directory, relative to the project directory.
    pub fn with_build_dir(mut self, build: &Path) -> Self {
        self.build = self.project.join(build);
        self
    }

    /// Apply the overrides of a project configuration.
    pub fn with_layout(self, layout: &LayoutConfig) -> Self {
        match &layout.build_dir {
            Some(build) => self.with_build_dir(build),
            None => self,
        }
    }
}

impl ProjectLayout for FilesystemProject {
    fn root_dir(&self) -> &Path {
        &self.root
    }

    fn project_dir(&self) -> &Path {
        &self.project
    }

    fn build_dir(&self) -> &Path {
        &self.build
    }
}
