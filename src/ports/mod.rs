mod project_layout;

pub use project_layout::{BUILD_SRC_DIR, ProjectLayout};
