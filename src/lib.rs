//! gx: helpers for publishing a library.
//!
//! Case formatting for identifiers, badge/GitHub/Maven URLs, POM and metadata
//! assembly, file state assertions, and line-based README verification with
//! an HTML report.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckOptions, PublishTask, TaskKind, TaskOutcome, assemble_at, check, check_at, run_tasks,
    run_tasks_at, task_list, task_names,
};
pub use domain::github::Repository;
pub use domain::maven::Artifact;
pub use domain::{AppError, Badge, Variant, camel_case, colon_case, kebab_case, slash_case};
pub use services::{CheckReport, FileCheck, FileState, assemble};
