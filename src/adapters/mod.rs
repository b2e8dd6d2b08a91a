pub mod project_filesystem;

pub use project_filesystem::{DEFAULT_BUILD_DIR, FilesystemProject};
