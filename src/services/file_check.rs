//! Line-based verification of a text file with an HTML report.
//!
//! The target is inspected in order: missing, directory, no text, then the
//! expected substrings and regexes against every line. The report is always
//! written before the outcome is returned.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info};

use crate::domain::AppError;

/// Expectations for the lines of a text file.
#[derive(Debug, Clone, Default)]
pub struct FileCheck {
    expected: Vec<String>,
    regexes: Vec<Regex>,
}

/// Report written by a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub text: String,
}

impl FileCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substrings that must each appear in at least one line.
    pub fn with_expected<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in expected {
            let line = line.into();
            if !self.expected.contains(&line) {
                self.expected.push(line);
            }
        }
        self
    }

    /// Regexes that must each match at least one line.
    pub fn with_regexes<I>(mut self, regexes: I) -> Self
    where
        I: IntoIterator<Item = Regex>,
    {
        for regex in regexes {
            if !self.regexes.iter().any(|it| it.as_str() == regex.as_str()) {
                self.regexes.push(regex);
            }
        }
        self
    }

    /// Compile `patterns` and add them as regexes.
    pub fn with_patterns<I, S>(self, patterns: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes =
            patterns.into_iter().map(|it| Regex::new(it.as_ref())).collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_regexes(regexes))
    }

    /// Describe every unmet expectation for `target`; empty means success.
    pub fn issues(&self, target: &Path) -> Result<Vec<String>, AppError> {
        if !target.exists() {
            return Ok(vec!["the file does not exist".to_string()]);
        }
        if target.is_dir() {
            return Ok(vec!["the file is a directory".to_string()]);
        }
        let bytes = fs::read(target)?;
        let content = String::from_utf8_lossy(&bytes);
        let actual: Vec<&str> = content.lines().collect();
        if actual.is_empty() {
            return Ok(vec!["the file does not contain text".to_string()]);
        }
        let missing = self
            .expected
            .iter()
            .filter(|line| !actual.iter().any(|it| it.contains(line.as_str())))
            .map(|line| format!("the file does not contain \"{}\" line", line));
        let unmatched = self
            .regexes
            .iter()
            .filter(|regex| !actual.iter().any(|it| regex.is_match(it)))
            .map(|regex| format!("the file does not match \"{}\" regex", regex.as_str()));
        Ok(missing.chain(unmatched).collect())
    }

    /// Check `target` and write the outcome to `report`.
    ///
    /// Fails with [`AppError::CheckFailed`] after writing the HTML issue list
    /// when any expectation is unmet.
    pub fn run(&self, target: &Path, report: &Path) -> Result<CheckReport, AppError> {
        let issues = self.issues(target)?;
        prepare_report(report)?;
        let name = file_name(target);
        if issues.is_empty() {
            let text = render_success(&name);
            fs::write(report, &text)?;
            info!(file = %target.display(), "{}", text);
            return Ok(CheckReport { path: report.to_path_buf(), text });
        }
        debug!(file = %target.display(), issues = issues.len(), "check failed");
        fs::write(report, render_issues(&name, &issues))?;
        Err(AppError::CheckFailed {
            name,
            report: std::path::absolute(report).unwrap_or_else(|_| report.to_path_buf()),
        })
    }
}

/// Plain sentence written when every expectation is met.
pub fn render_success(name: &str) -> String {
    format!("All checks of the file along the \"{}\" were successful.", name)
}

/// HTML fragment listing `issues`.
pub fn render_issues(name: &str, issues: &[String]) -> String {
    let items = issues.iter().map(|it| format!("<li>{}</li>", it)).collect::<Vec<_>>().join("\n");
    format!(
        "<html>\n<h3>The following problems were found while checking the <code>{}</code>:</h3>\n<ul>{}</ul>\n</html>",
        name, items
    )
}

fn prepare_report(report: &Path) -> Result<(), AppError> {
    if report.exists() {
        if !report.is_file() {
            return Err(AppError::illegal_state(format!(
                "The report {} is not a file!",
                report.display()
            )));
        }
        fs::remove_file(report)?;
        return Ok(());
    }
    match report.parent() {
        Some(parent) => fs::create_dir_all(parent)?,
        None => {
            return Err(AppError::illegal_state(format!(
                "The report {} has no parent!",
                report.display()
            )));
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn report(temp: &assert_fs::TempDir) -> PathBuf {
        temp.path().join("reports/readme/index.html")
    }

    #[test]
    fn all_expected_lines_present() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foo\nbar\nbaz\n").unwrap();
        let report = report(&temp);

        let outcome = FileCheck::new().with_expected(["foo", "bar", "baz"]).run(file.path(), &report).unwrap();

        assert_eq!(outcome.text, "All checks of the file along the \"bar\" were successful.");
        assert_eq!(fs::read_to_string(&report).unwrap(), outcome.text);
    }

    #[test]
    fn substrings_match_inside_lines() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foobarbaz").unwrap();
        let check = FileCheck::new().with_expected(["foo", "bar", "baz"]);
        assert!(check.issues(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_line_is_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foo").unwrap();
        let report = report(&temp);

        let err = FileCheck::new().with_expected(["bar"]).run(file.path(), &report).unwrap_err();

        assert!(matches!(&err, AppError::CheckFailed { name, .. } if name == "bar"));
        let text = fs::read_to_string(&report).unwrap();
        assert!(text.contains("the file does not contain \"bar\" line"));
        assert!(text.starts_with("<html>\n<h3>The following problems were found while checking the <code>bar</code>:</h3>"));
    }

    #[test]
    fn unmatched_regex_is_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("version 1.2\n").unwrap();
        let check = FileCheck::new().with_patterns([r"^version \d+\.\d+$", r"^f\w\d"]).unwrap();
        assert_eq!(check.issues(file.path()).unwrap(), vec!["the file does not match \"^f\\w\\d\" regex"]);
    }

    #[test]
    fn issues_list_lines_before_regexes() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foo").unwrap();
        let check = FileCheck::new().with_patterns(["^x"]).unwrap().with_expected(["baz", "baz"]);
        assert_eq!(
            check.issues(file.path()).unwrap(),
            vec!["the file does not contain \"baz\" line", "the file does not match \"^x\" regex"]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        let report = report(&temp);
        let err = FileCheck::new().with_expected(["foo"]).run(&temp.path().join("none"), &report).unwrap_err();
        assert!(matches!(err, AppError::CheckFailed { .. }));
        assert!(fs::read_to_string(&report).unwrap().contains("the file does not exist"));
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_binary(b"foo\n\xff\xfe bar\n").unwrap();
        let report = report(&temp);

        let err = FileCheck::new().with_expected(["foo", "baz"]).run(file.path(), &report).unwrap_err();

        assert!(matches!(err, AppError::CheckFailed { .. }));
        assert!(fs::read_to_string(&report).unwrap().contains("the file does not contain \"baz\" line"));
        assert!(FileCheck::new().with_expected(["foo", " bar"]).run(file.path(), &report).is_ok());
    }

    #[test]
    fn report_lists_every_issue() {
        let issues = vec!["first problem".to_string(), "second problem".to_string()];
        assert_eq!(
            render_issues("README.md", &issues),
            "<html>\n<h3>The following problems were found while checking the <code>README.md</code>:</h3>\n<ul><li>first problem</li>\n<li>second problem</li></ul>\n</html>"
        );
    }

    #[test]
    fn empty_file_is_reported_regardless_of_expectations() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.touch().unwrap();
        assert_eq!(FileCheck::new().issues(file.path()).unwrap(), vec!["the file does not contain text"]);
        assert_eq!(
            FileCheck::new().with_expected(["foo"]).issues(file.path()).unwrap(),
            vec!["the file does not contain text"]
        );
    }

    #[test]
    fn directory_is_reported() {
        let temp = assert_fs::TempDir::new().unwrap();
        let dir = temp.child("bar");
        dir.create_dir_all().unwrap();
        let report = report(&temp);
        assert!(FileCheck::new().run(dir.path(), &report).is_err());
        assert!(fs::read_to_string(&report).unwrap().contains("the file is a directory"));
    }

    #[test]
    fn empty_expectations_pass_for_non_empty_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("anything").unwrap();
        assert!(FileCheck::new().run(file.path(), &report(&temp)).is_ok());
    }

    #[test]
    fn previous_report_is_replaced() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foo").unwrap();
        let report = temp.child("report");
        report.write_str("stale report with more text than the new one").unwrap();
        FileCheck::new().with_expected(["foo"]).run(file.path(), report.path()).unwrap();
        report.assert("All checks of the file along the \"bar\" were successful.");
    }

    #[test]
    fn report_directory_is_rejected() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bar");
        file.write_str("foo").unwrap();
        let report = temp.child("report");
        report.create_dir_all().unwrap();
        let err = FileCheck::new().run(file.path(), report.path()).unwrap_err();
        assert!(matches!(err, AppError::IllegalState(_)));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(matches!(FileCheck::new().with_patterns(["("]), Err(AppError::InvalidRegex(_))));
    }
}
