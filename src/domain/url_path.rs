use url::Url;

use super::AppError;
use super::text_case::slash_case;

/// Parse a URL, reporting the offending text on failure.
pub fn parse_url(value: &str) -> Result<Url, AppError> {
    Url::parse(value).map_err(|source| AppError::InvalidUrl { url: value.to_string(), source })
}

/// Append path segments to `base`.
///
/// Blank segments after the first are skipped. A trailing `/` on `base` is
/// dropped before joining, so `https://foo/` and `https://foo` resolve the
/// same way.
///
/// ```
/// use gx::domain::url_path::{parse_url, resolve};
///
/// let base = parse_url("https://github.com").unwrap();
/// let url = resolve(&base, "foo", &["", "bar"]).unwrap();
/// assert_eq!(url.as_str(), "https://github.com/foo/bar");
/// ```
pub fn resolve(base: &Url, segment: &str, other: &[&str]) -> Result<Url, AppError> {
    let path = slash_case(segment, other)?;
    let joined = format!("{}/{}", base.as_str().trim_end_matches('/'), path);
    parse_url(&joined)
}
