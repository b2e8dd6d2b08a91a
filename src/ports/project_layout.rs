//! Directory layout of the project being published.
//!
//! This port only resolves locations. Reading and writing files is done by
//! the services against the resolved paths.

use std::path::{Path, PathBuf};

/// Name of the directory holding build logic, relative to the project directory.
pub const BUILD_SRC_DIR: &str = "buildSrc";

/// Port for the directories of a project.
pub trait ProjectLayout {
    /// Root directory of the whole build.
    fn root_dir(&self) -> &Path;

    /// Directory of this project; equal to the root for single-project builds.
    fn project_dir(&self) -> &Path;

    /// Directory receiving build outputs.
    fn build_dir(&self) -> &Path;

    fn build_src_dir(&self) -> PathBuf {
        self.project_dir().join(BUILD_SRC_DIR)
    }

    /// Resolve `relative` inside the root directory.
    fn root_file(&self, relative: &Path) -> PathBuf {
        self.root_dir().join(relative)
    }

    /// Resolve `relative` inside the project directory.
    fn project_file(&self, relative: &Path) -> PathBuf {
        self.project_dir().join(relative)
    }

    /// Resolve `relative` inside the build directory.
    fn build_file(&self, relative: &Path) -> PathBuf {
        self.build_dir().join(relative)
    }

    /// Resolve `relative` inside the buildSrc directory.
    fn build_src_file(&self, relative: &Path) -> PathBuf {
        self.build_src_dir().join(relative)
    }
}
