mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn jarship_cmd() -> Command {
    Command::cargo_bin("jarship").unwrap()
}

#[test]
fn test_artifacts_release() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["artifacts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(release)"))
        .stdout(predicate::str::contains("demo-lib-2.0.0.jar"))
        .stdout(predicate::str::contains("demo-lib-2.0.0-sources.jar"))
        .stdout(predicate::str::contains("javadoc").not())
        .stdout(predicate::str::contains("https://repo.example.com/releases"))
        .stdout(predicate::str::contains("signing:     yes"));
}

#[test]
fn test_artifacts_snapshot() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["-P", "projVersion=2.1.0-SNAPSHOT", "-P", "hasJavadocJar=true", "artifacts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(snapshot)"))
        .stdout(predicate::str::contains("demo-lib-2.1.0-SNAPSHOT-javadoc.jar"))
        .stdout(predicate::str::contains("https://repo.example.com/snapshots"))
        .stdout(predicate::str::contains("signing:     no"));
}

#[test]
fn test_artifacts_publication_disabled() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["-P", "hasPublication=false", "artifacts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("publication: disabled"))
        .stdout(predicate::str::contains("repository").not());
}

#[test]
fn test_pom_output() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["pom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<groupId>com.example</groupId>"))
        .stdout(predicate::str::contains("<artifactId>demo-lib</artifactId>"))
        .stdout(predicate::str::contains("<version>2.0.0</version>"))
        .stdout(predicate::str::contains("<name>MIT</name>"))
        .stdout(predicate::str::contains("<scm>").not());
}
