use crate::domain::ProjectConfig;
use crate::ports::ProjectLayout;

/// Application context holding dependencies for command execution.
pub struct AppContext<L: ProjectLayout> {
    layout: L,
    config: ProjectConfig,
}

impl<L: ProjectLayout> AppContext<L> {
    /// Create a new application context.
    pub fn new(layout: L, config: ProjectConfig) -> Self {
        Self { layout, config }
    }

    /// Get a reference to the project layout.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Get a reference to the project configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}
