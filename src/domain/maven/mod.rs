//! Maven coordinates, POM and metadata documents, and snapshot repository URLs.

mod artifact;

use chrono::NaiveDateTime;
use url::Url;

use crate::domain::AppError;
use crate::domain::url_path::parse_url;
use crate::domain::validation::require_not_blank;

pub use artifact::Artifact;

const MAVEN_APACHE_URL: &str = "http://maven.apache.org";
const SNAPSHOT_REPOSITORY_URL: &str = "https://s01.oss.sonatype.org/content/repositories/snapshots";

pub const DEFAULT_MODEL_VERSION: &str = "4.0.0";

/// Format of `lastUpdated` in Maven metadata (`yyyyMMddHHmmss`).
pub const LAST_UPDATED_FORMAT: &str = "%Y%m%d%H%M%S";

/// Fields of a minimal POM document.
#[derive(Debug, Clone, Copy)]
pub struct Pom<'a> {
    pub model_version: &'a str,
    pub group_id: &'a str,
    pub artifact_id: &'a str,
    pub version: &'a str,
    pub packaging: &'a str,
}

impl<'a> Pom<'a> {
    pub fn new(artifact: &'a Artifact, version: &'a str, packaging: &'a str) -> Self {
        Self {
            model_version: DEFAULT_MODEL_VERSION,
            group_id: artifact.group(),
            artifact_id: artifact.id(),
            version,
            packaging,
        }
    }

    /// Render the POM as a single-line XML document.
    pub fn render(&self) -> Result<String, AppError> {
        let model_version = require_not_blank(self.model_version, "The model version is blank!")?;
        let group_id = require_not_blank(self.group_id, "The group ID is blank!")?;
        let artifact_id = require_not_blank(self.artifact_id, "The artifact ID is blank!")?;
        let version = require_not_blank(self.version, "The version is blank!")?;
        let packaging = require_not_blank(self.packaging, "The packaging is blank!")?;

        let url = format!("{}/POM/{}", MAVEN_APACHE_URL, model_version);
        let project = [
            ("xsi:schemaLocation", format!("{} {}/xsd/maven-{}.xsd", url, MAVEN_APACHE_URL, model_version)),
            ("xmlns", url),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance".to_string()),
        ]
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ");
        let body: String = [
            ("modelVersion", model_version),
            ("groupId", group_id),
            ("artifactId", artifact_id),
            ("version", version),
            ("packaging", packaging),
        ]
        .iter()
        .map(|(key, value)| format!("<{0}>{1}</{0}>", key, value))
        .collect();
        Ok(format!("<project {}>{}</project>", project, body))
    }
}

/// Render `maven-metadata.xml` for a single published version.
pub fn metadata(
    group_id: &str,
    artifact_id: &str,
    version: &str,
    last_updated: NaiveDateTime,
) -> Result<String, AppError> {
    let group_id = require_not_blank(group_id, "The group ID is blank!")?;
    let artifact_id = require_not_blank(artifact_id, "The artifact ID is blank!")?;
    let version = require_not_blank(version, "The version is blank!")?;
    Ok(format!(
        r#"<metadata>
    <groupId>{group_id}</groupId>
    <artifactId>{artifact_id}</artifactId>
    <versioning>
        <versions>
            <version>{version}</version>
        </versions>
        <lastUpdated>{last_updated}</lastUpdated>
    </versioning>
</metadata>"#,
        last_updated = last_updated.format(LAST_UPDATED_FORMAT),
    ))
}

/// URL of an artifact version in the Sonatype snapshot repository.
pub fn snapshot_url(group_id: &str, artifact_id: &str, version: &str) -> Result<Url, AppError> {
    let group_id = require_not_blank(group_id, "The group ID is blank!")?;
    let artifact_id = require_not_blank(artifact_id, "The artifact ID is blank!")?;
    let version = require_not_blank(version, "The version is blank!")?;
    parse_url(&format!(
        "{}/{}/{}/{}",
        SNAPSHOT_REPOSITORY_URL,
        group_id.replace('.', "/"),
        artifact_id,
        version
    ))
}

impl Artifact {
    pub fn pom(&self, version: &str, packaging: &str) -> Result<String, AppError> {
        Pom::new(self, version, packaging).render()
    }

    pub fn metadata(&self, version: &str, last_updated: NaiveDateTime) -> Result<String, AppError> {
        metadata(self.group(), self.id(), version, last_updated)
    }

    pub fn snapshot_url(&self, version: &str) -> Result<Url, AppError> {
        snapshot_url(self.group(), self.id(), version)
    }
}
