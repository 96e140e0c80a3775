mod common;

use common::sample_publication;
use jarship_maven::pom::render_pom;

#[test]
fn pom_contains_identity_and_metadata() {
    let pom = render_pom(&sample_publication(&[])).unwrap();
    assert!(pom.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(pom.contains("<modelVersion>4.0.0</modelVersion>"));
    assert!(pom.contains("<groupId>com.example</groupId>"));
    assert!(pom.contains("<artifactId>demo-lib</artifactId>"));
    assert!(pom.contains("<version>2.0.0</version>"));
    assert!(pom.contains("<name>Demo Lib</name>"));
    assert!(pom.contains("<description>A demo library</description>"));
    assert!(pom.contains("<url>https://example.com/demo-lib</url>"));
    assert!(pom.contains("<name>MIT</name>"));
    assert!(pom.contains("<url>https://opensource.org/licenses/MIT</url>"));
    assert!(pom.contains("<name>Example Org</name>"));
    assert!(pom.contains(
        "<developerConnection>scm:git:https://github.com/example/demo-lib.git</developerConnection>"
    ));
}

#[test]
fn pom_omits_unset_optional_metadata() {
    let publication = sample_publication(&[
        ("projUrl", ""),
        ("projScmConnection", ""),
        ("projScmUrl", ""),
        ("projLicenseUrl", ""),
    ]);
    let pom = render_pom(&publication).unwrap();
    assert!(!pom.contains("<scm>"));
    assert!(!pom.contains("https://example.com/demo-lib"));
    assert!(!pom.contains("opensource.org"));
    assert!(pom.contains("<url>https://example.com</url>"));
}

#[test]
fn pom_escapes_text() {
    let pom = render_pom(&sample_publication(&[("projDesc", "Fast & <small>")])).unwrap();
    assert!(pom.contains("<description>Fast &amp; &lt;small&gt;</description>"));
}
