//! Shared testing utilities for gx CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const CONFIG: &str = r#"version = "0.5.4"

[maven]
group = "com.github.foo"
id = "bar"

[github]
owner = "foo"
name = "bar"
"#;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Create an environment with `gx.toml` already written.
    pub fn with_config() -> Self {
        let ctx = Self::new();
        ctx.write("gx.toml", CONFIG);
        ctx
    }

    /// Path to the project root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `gx` binary within the project root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gx").expect("Failed to locate gx binary");
        cmd.current_dir(self.work_dir()).env_remove("GX_LOG");
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }
}
