use std::path::Path;

use tempfile::TempDir;

/// `gradle.properties` for a release of `com.example:demo-lib:2.0.0`.
pub const PROPERTIES: &str = "\
hasPublication=true
publicationSigning=true
hasJavadocJar=false
hasSourcesJar=true
projGroupId=com.example
projArtifactId=demo-lib
projName=Demo Lib
projVersion=2.0.0
projDesc=A demo library
projUrl=https://example.com/demo-lib
projLicense=MIT
projLicenseUrl=https://opensource.org/licenses/MIT
projLicenseFileName=LICENSE
orgName=Example Org
orgUrl=https://example.com
jdkVersion=17
jdkEnablePreview=false
";

pub fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A project with pre-compiled classes, one resource, one source file and a license.
pub fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "gradle.properties", PROPERTIES.as_bytes());
    write(root, "LICENSE", b"MIT License\n");
    write(root, "src/main/java/com/example/Demo.java", b"package com.example; public class Demo {}\n");
    write(root, "src/main/resources/demo.properties", b"greeting=hello\n");
    write(root, "build/classes/com/example/Demo.class", &[0xCA, 0xFE, 0xBA, 0xBE]);
    write(
        root,
        "jarship.toml",
        b"[publication]\nname = \"test\"\nsnapshot-repo = \"https://repo.example.com/snapshots\"\nrelease-repo = \"https://repo.example.com/releases\"\n",
    );
    tmp
}
