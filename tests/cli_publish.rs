mod common;

use common::TestContext;
use predicates::prelude::*;

const SNAPSHOT_README: &str = r#"# bar

![version](https://img.shields.io/static/v1?label=version&message=0.5.4-SNAPSHOT&labelColor=212121&color=2962ff&style=flat)

[Maven](https://s01.oss.sonatype.org/content/repositories/snapshots/com/github/foo/bar/0.5.4-SNAPSHOT)
[Documentation](https://foo.github.io/bar/doc/0.5.4-SNAPSHOT)

```kotlin
implementation("com.github.foo:bar:0.5.4-SNAPSHOT")
```
"#;

#[test]
fn lists_tasks() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("assembleSnapshotPom\n"))
        .stdout(predicate::str::contains("checkUnstableReadme\n"));
}

#[test]
fn lists_tasks_as_json() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["tasks", "--json"]).output().unwrap();
    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["name"], "assembleSnapshotPom");
    assert_eq!(entries[0]["variant"], "snapshot");
    assert_eq!(entries[0]["kind"], "pom");
}

#[test]
fn run_requires_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["run", "assembleSnapshotPom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project config not found"));
}

#[test]
fn run_assembles_artifacts() {
    let ctx = TestContext::with_config();

    ctx.cli()
        .args(["run", "assembleSnapshotPom", "assembleSnapshotMavenMetadata", "assembleSnapshotMetadata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ assembleSnapshotPom"));

    assert!(ctx.read("build/libs/bar-0.5.4-SNAPSHOT.pom").contains("<version>0.5.4-SNAPSHOT</version>"));
    assert!(ctx.read("build/yml/maven-metadata.yml").contains("artifactId: 'bar'"));
    assert!(ctx.read("build/yml/metadata.yml").contains("owner: 'foo'"));
}

#[test]
fn run_rejects_unknown_task() {
    let ctx = TestContext::with_config();

    ctx.cli()
        .args(["run", "assembleReleasePom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task 'assembleReleasePom' not found"));
}

#[test]
fn check_readme_tasks() {
    let ctx = TestContext::with_config();
    ctx.write("README.md", SNAPSHOT_README);

    ctx.cli()
        .args(["run", "checkSnapshotReadme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("were successful"));

    ctx.cli()
        .args(["run", "checkUnstableReadme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("See the report"));
    let report = ctx.read("build/reports/analysis/readme/index.html");
    assert!(report.contains("0.5.4u-SNAPSHOT"));
}
