pub mod badge;
pub mod config;
pub mod error;
pub mod github;
pub mod markdown;
pub mod maven;
pub mod task;
pub mod text_case;
pub mod url_path;
pub mod validation;
pub mod variant;

pub use badge::Badge;
pub use config::{CONFIG_FILE, LayoutConfig, ProjectConfig};
pub use error::AppError;
pub use github::Repository;
pub use maven::{Artifact, Pom};
pub use task::{TaskContainer, task_name};
pub use text_case::{camel_case, colon_case, kebab_case, slash_case, uppercase_first_char};
pub use variant::Variant;
