use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;

/// Write `text` to `path`, replacing an existing regular file.
///
/// Parent directories are created when nothing exists at `path`. An existing
/// directory (or anything else that is not a regular file) is left untouched
/// and reported as an error.
pub fn assemble<'a>(path: &'a Path, text: &str) -> Result<&'a Path, AppError> {
    if text.is_empty() {
        return Err(AppError::invalid_argument("The text is empty!"));
    }
    if path.exists() {
        if !path.is_file() {
            return Err(AppError::illegal_state(format!(
                "The file {} is not a regular file!",
                path.display()
            )));
        }
        debug!(path = %path.display(), "removing previous artifact");
        fs::remove_file(path)?;
    } else if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "artifact assembled");
    Ok(path)
}
