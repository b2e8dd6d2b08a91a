use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectLayout;
use crate::services::{CheckReport, FileCheck};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// File to verify, relative to the root directory unless absolute.
    pub file: PathBuf,
    pub expected: Vec<String>,
    pub regexes: Vec<String>,
    /// Report location; defaults to `reports/analysis/{file name}/index.html`
    /// inside the build directory.
    pub report: Option<PathBuf>,
}

pub fn execute<L: ProjectLayout>(layout: &L, options: CheckOptions) -> Result<CheckReport, AppError> {
    let target = layout.root_file(&options.file);
    let report = match &options.report {
        Some(report) => layout.root_file(report),
        None => layout.build_file(&default_report(&options.file)),
    };
    let check = FileCheck::new().with_expected(options.expected).with_patterns(&options.regexes)?;
    check.run(&target, &report)
}

fn default_report(file: &Path) -> PathBuf {
    let name = file.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    Path::new("reports/analysis").join(name).join("index.html")
}
