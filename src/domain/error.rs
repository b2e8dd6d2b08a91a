use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for gx operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required input was blank or otherwise rejected before any side effect.
    #[error("{0}")]
    InvalidArgument(String),

    /// A file or directory is not in the state an operation requires.
    #[error("{0}")]
    IllegalState(String),

    /// Content verification found problems; the report was written.
    #[error("Problems were found while checking the \"{name}\". See the report {}", report.display())]
    CheckFailed { name: String, report: PathBuf },

    /// A URL could not be built from its parts.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A content pattern is not a valid regular expression.
    #[error(transparent)]
    InvalidRegex(#[from] regex::Error),

    /// A task with the same name is already registered.
    #[error("Task '{0}' already exists")]
    TaskExists(String),

    /// No task is registered under the name.
    #[error("Task '{name}' not found. Available: {available}")]
    TaskNotFound { name: String, available: String },

    /// Unknown release variant.
    #[error("Invalid variant '{0}': must be one of snapshot, unstable")]
    InvalidVariant(String),

    /// Project config file missing.
    #[error("Project config not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        AppError::InvalidArgument(message.into())
    }

    pub fn illegal_state<S: Into<String>>(message: S) -> Self {
        AppError::IllegalState(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only branch on the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidArgument(_)
            | AppError::InvalidUrl { .. }
            | AppError::InvalidRegex(_)
            | AppError::InvalidVariant(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) | AppError::TaskNotFound { .. } => io::ErrorKind::NotFound,
            AppError::TaskExists(_) => io::ErrorKind::AlreadyExists,
            AppError::IllegalState(_) | AppError::CheckFailed { .. } => io::ErrorKind::Other,
        }
    }
}
