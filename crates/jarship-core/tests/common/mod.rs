use std::collections::BTreeMap;

/// A complete property set for a release of `com.example:demo-lib:2.0.0`.
pub fn sample_properties() -> BTreeMap<String, String> {
    [
        ("hasPublication", "true"),
        ("publicationSigning", "true"),
        ("hasJavadocJar", "false"),
        ("hasSourcesJar", "true"),
        ("projGroupId", "com.example"),
        ("projArtifactId", "demo-lib"),
        ("projName", "Demo Lib"),
        ("projVersion", "2.0.0"),
        ("projDesc", "A demo library"),
        ("projUrl", "https://example.com/demo-lib"),
        ("projLicenseUrl", "https://opensource.org/licenses/MIT"),
        ("projScmConnection", "scm:git:https://github.com/example/demo-lib.git"),
        ("projScmUrl", "https://github.com/example/demo-lib"),
        ("projLicense", "MIT"),
        ("projLicenseFileName", "LICENSE"),
        ("orgName", "Example Org"),
        ("orgUrl", "https://example.com"),
        ("jdkVersion", "17"),
        ("jdkEnablePreview", "false"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
