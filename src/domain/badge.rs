use url::Url;

use super::AppError;
use super::url_path::parse_url;
use super::validation::require_not_blank;

const HOST: &str = "https://img.shields.io";

/// Static badge rendered by shields.io.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub message: String,
    /// HEX or name of the color on the left.
    pub label_color: String,
    /// HEX or name of the color on the right.
    pub color: String,
    /// One of `flat`, `flat-square`, `plastic`, ...
    pub style: String,
}

impl Badge {
    pub const DEFAULT_LABEL_COLOR: &'static str = "212121";
    pub const DEFAULT_STYLE: &'static str = "flat";

    pub fn new(label: impl Into<String>, message: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            label_color: Self::DEFAULT_LABEL_COLOR.to_string(),
            color: color.into(),
            style: Self::DEFAULT_STYLE.to_string(),
        }
    }

    pub fn with_label_color(mut self, label_color: impl Into<String>) -> Self {
        self.label_color = label_color.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// URL of the SVG badge.
    pub fn url(&self) -> Result<Url, AppError> {
        let query = [
            ("label", require_not_blank(&self.label, "The label is blank!")?),
            ("message", require_not_blank(&self.message, "The message is blank!")?),
            ("labelColor", require_not_blank(&self.label_color, "The label color is blank!")?),
            ("color", require_not_blank(&self.color, "The color is blank!")?),
            ("style", require_not_blank(&self.style, "The style is blank!")?),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
        parse_url(&format!("{}/static/v1?{}", HOST, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_with_defaults() {
        let url = Badge::new("foo", "bar", "121212").url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://img.shields.io/static/v1?label=foo&message=bar&labelColor=212121&color=121212&style=flat"
        );
    }

    #[test]
    fn url_with_overrides() {
        let url = Badge::new("version", "0.1.0-SNAPSHOT", "2962ff")
            .with_label_color("white")
            .with_style("flat-square")
            .url()
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://img.shields.io/static/v1?label=version&message=0.1.0-SNAPSHOT&labelColor=white&color=2962ff&style=flat-square"
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(Badge::new("", "bar", "1").url().unwrap_err().to_string(), "The label is blank!");
        assert_eq!(Badge::new("foo", " ", "1").url().unwrap_err().to_string(), "The message is blank!");
        assert_eq!(Badge::new("foo", "bar", "").url().unwrap_err().to_string(), "The color is blank!");
        assert_eq!(
            Badge::new("foo", "bar", "1").with_label_color("").url().unwrap_err().to_string(),
            "The label color is blank!"
        );
        assert_eq!(
            Badge::new("foo", "bar", "1").with_style(" ").url().unwrap_err().to_string(),
            "The style is blank!"
        );
    }
}
