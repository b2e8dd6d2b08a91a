use url::Url;

use super::AppError;
use super::validation::require_not_blank;

/// `[text](url)`
pub fn link(text: &str, url: &Url) -> Result<String, AppError> {
    let text = require_not_blank(text, "The text is blank!")?;
    Ok(format!("[{}]({})", text, url))
}

/// `![text](url)`
pub fn image(text: &str, url: &Url) -> Result<String, AppError> {
    Ok(format!("!{}", link(text, url)?))
}
