//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapters::FilesystemProject;
use crate::app::AppContext;
use crate::app::commands::{check, publish};
use crate::app::config::load_config;
use crate::domain::{AppError, CONFIG_FILE};
use crate::ports::ProjectLayout;
use crate::services::{CheckReport, assemble};

pub use crate::app::commands::check::CheckOptions;
pub use crate::app::commands::publish::{PublishTask, TaskKind, TaskOutcome};

/// Create an `AppContext` for a project rooted at `root`.
fn create_context(
    root: &Path,
    config: Option<&Path>,
) -> Result<AppContext<FilesystemProject>, AppError> {
    let config_path = match config {
        Some(path) => root.join(path),
        None => root.join(CONFIG_FILE),
    };
    let config = load_config(&config_path)?;
    let layout = FilesystemProject::new(root.to_path_buf()).with_layout(&config.layout);
    Ok(AppContext::new(layout, config))
}

/// Names of every publishing task, in registration order.
pub fn task_names() -> Result<Vec<String>, AppError> {
    Ok(publish::tasks()?.names().map(str::to_string).collect())
}

/// Every publishing task with its name.
pub fn task_list() -> Result<Vec<(String, PublishTask)>, AppError> {
    Ok(publish::tasks()?.iter().map(|(name, task)| (name.to_string(), *task)).collect())
}

/// Run publishing tasks by name in the current directory.
pub fn run_tasks(names: &[String], config: Option<&Path>) -> Result<Vec<TaskOutcome>, AppError> {
    run_tasks_at(std::env::current_dir()?, names, config)
}

/// Run publishing tasks by name for the project rooted at `root`.
///
/// Every name is resolved before the first task runs; execution stops at the
/// first failing task.
pub fn run_tasks_at(
    root: impl Into<PathBuf>,
    names: &[String],
    config: Option<&Path>,
) -> Result<Vec<TaskOutcome>, AppError> {
    let root = root.into();
    let ctx = create_context(&root, config)?;
    let tasks = publish::tasks()?;
    let selected = names.iter().map(|name| tasks.get(name).copied()).collect::<Result<Vec<_>, _>>()?;
    let now = Utc::now().naive_utc();
    selected.into_iter().map(|task| publish::execute(&ctx, task, now)).collect()
}

/// Verify a file in the current directory.
pub fn check(options: CheckOptions) -> Result<CheckReport, AppError> {
    check_at(std::env::current_dir()?, options)
}

/// Verify a file of the project rooted at `root`.
pub fn check_at(root: impl Into<PathBuf>, options: CheckOptions) -> Result<CheckReport, AppError> {
    let layout = FilesystemProject::new(root.into());
    check::execute(&layout, options)
}

/// Write `text` to `path`, relative to the project rooted at `root` unless absolute.
pub fn assemble_at(root: impl Into<PathBuf>, path: &Path, text: &str) -> Result<PathBuf, AppError> {
    let layout = FilesystemProject::new(root.into());
    let target = layout.project_file(path);
    assemble(&target, text)?;
    Ok(target)
}
