mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn jarship_cmd() -> Command {
    Command::cargo_bin("jarship").unwrap()
}

#[test]
fn test_config_without_properties_fails() {
    let tmp = TempDir::new().unwrap();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required property"))
        .stderr(predicate::str::contains("hasPublication"));
}

#[test]
fn test_config_missing_group_id_fails() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["-P", "projGroupId=", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("projGroupId"));
}

#[test]
fn test_config_json() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"groupId\": \"com.example\""))
        .stdout(predicate::str::contains("\"hasSourcesJar\": true"))
        .stdout(predicate::str::contains("\"jdkVersion\": 17"));
}

#[test]
fn test_config_property_override() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["config", "-P", "projVersion=3.1.0-SNAPSHOT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.example:demo-lib:3.1.0-SNAPSHOT"));
}

#[test]
fn test_config_env_property() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .env("JARSHIP_PROP_projName", "From Env")
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From Env"));
}

#[test]
fn test_config_project_dir_flag() {
    let tmp = common::project();
    let elsewhere = TempDir::new().unwrap();

    jarship_cmd()
        .current_dir(elsewhere.path())
        .arg("-C")
        .arg(tmp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("com.example:demo-lib:2.0.0"));
}

#[test]
fn test_config_invalid_boolean_fails() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["-P", "hasSourcesJar=yes", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hasSourcesJar"));
}

#[test]
fn test_config_properties_before_and_after_subcommand() {
    let tmp = common::project();

    jarship_cmd()
        .current_dir(tmp.path())
        .args(["-P", "projVersion=4.0.0", "config", "--json", "-P", "hasJavadocJar=true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"4.0.0\""))
        .stdout(predicate::str::contains("\"hasJavadocJar\": true"));
}
