mod common;

use common::sample_properties;
use jarship_core::config::{parse_bool, Config};
use jarship_util::errors::JarshipError;

#[test]
fn resolve_complete_properties() {
    let config = Config::resolve(&sample_properties()).unwrap();
    assert!(config.has_publication);
    assert!(config.publication_signing);
    assert!(!config.has_javadoc_jar);
    assert!(config.has_sources_jar);
    assert_eq!(config.group_id, "com.example");
    assert_eq!(config.artifact_id, "demo-lib");
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.jdk_version, 17);
    assert_eq!(config.jdk_early_access_doc, None);
    assert_eq!(config.coordinate(), "com.example:demo-lib:2.0.0");
}

#[test]
fn missing_group_id_is_missing_config() {
    let mut props = sample_properties();
    props.remove("projGroupId");
    let err = Config::resolve(&props).unwrap_err();
    match err {
        JarshipError::MissingConfig { key } => assert_eq!(key, "projGroupId"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_required_value_counts_as_missing() {
    let mut props = sample_properties();
    props.insert("orgName".to_string(), "   ".to_string());
    let err = Config::resolve(&props).unwrap_err();
    assert!(matches!(err, JarshipError::MissingConfig { ref key } if key == "orgName"));
}

#[test]
fn optional_keys_default_to_none() {
    let mut props = sample_properties();
    for key in ["projUrl", "projLicenseUrl", "projScmConnection", "projScmUrl"] {
        props.remove(key);
    }
    props.insert("jdkEarlyAccessDoc".to_string(), "".to_string());
    let config = Config::resolve(&props).unwrap();
    assert_eq!(config.url, None);
    assert_eq!(config.license_url, None);
    assert_eq!(config.scm_connection, None);
    assert_eq!(config.scm_url, None);
    assert_eq!(config.jdk_early_access_doc, None);
}

#[test]
fn unparseable_boolean_is_invalid_config() {
    let mut props = sample_properties();
    props.insert("hasSourcesJar".to_string(), "yes".to_string());
    let err = Config::resolve(&props).unwrap_err();
    match err {
        JarshipError::InvalidConfig { key, value, .. } => {
            assert_eq!(key, "hasSourcesJar");
            assert_eq!(value, "yes");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_jdk_version_is_invalid_config() {
    for bad in ["seventeen", "0", "-8", "17.0"] {
        let mut props = sample_properties();
        props.insert("jdkVersion".to_string(), bad.to_string());
        let err = Config::resolve(&props).unwrap_err();
        assert!(
            matches!(err, JarshipError::InvalidConfig { ref key, .. } if key == "jdkVersion"),
            "{bad}: {err}"
        );
    }
}

#[test]
fn first_missing_key_is_reported_in_order() {
    let mut props = sample_properties();
    props.remove("projVersion");
    props.remove("hasPublication");
    let err = Config::resolve(&props).unwrap_err();
    assert!(matches!(err, JarshipError::MissingConfig { ref key } if key == "hasPublication"));
}

#[test]
fn booleans_are_case_insensitive() {
    assert_eq!(parse_bool("TRUE"), Some(true));
    assert_eq!(parse_bool(" False "), Some(false));
    assert_eq!(parse_bool("1"), None);
}

#[test]
fn config_serializes_with_property_style_names() {
    let config = Config::resolve(&sample_properties()).unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["groupId"], "com.example");
    assert_eq!(json["hasSourcesJar"], true);
}
