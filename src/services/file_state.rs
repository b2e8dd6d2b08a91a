use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Assertions on the state of a file, each returning the path on success so
/// they can be chained:
///
/// ```no_run
/// use std::path::Path;
/// use gx::services::FileState;
///
/// let index = Path::new("build/documentation/index.html").existing()?.regular_file()?.filled()?;
/// # Ok::<(), gx::AppError>(())
/// ```
pub trait FileState {
    /// Fails if nothing exists at the path.
    fn existing(&self) -> Result<&Self, AppError>;

    /// Fails unless the path is a regular file.
    fn regular_file(&self) -> Result<&Self, AppError>;

    /// Fails unless the path has a non-zero length.
    fn filled(&self) -> Result<&Self, AppError>;
}

impl FileState for Path {
    fn existing(&self) -> Result<&Self, AppError> {
        if !self.exists() {
            return Err(AppError::illegal_state(format!("The file {} does not exist!", self.display())));
        }
        Ok(self)
    }

    fn regular_file(&self) -> Result<&Self, AppError> {
        if !self.is_file() {
            return Err(AppError::illegal_state(format!(
                "The file {} is not a regular file!",
                self.display()
            )));
        }
        Ok(self)
    }

    fn filled(&self) -> Result<&Self, AppError> {
        let metadata = match fs::metadata(self) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::illegal_state(format!("The file {} does not exist!", self.display())));
            }
            Err(e) => return Err(e.into()),
        };
        if metadata.len() == 0 {
            return Err(AppError::illegal_state(format!("The file {} is empty!", self.display())));
        }
        Ok(self)
    }
}
