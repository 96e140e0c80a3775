use std::fs;
use std::path::Path;

use tempfile::TempDir;

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

const SETTINGS: &str = "\
[publication]
name = \"test\"
snapshot-repo = \"https://repo.example.com/snapshots/\"
release-repo = \"https://repo.example.com/releases/\"
";

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project with a license, one resource and pre-built classes, but no Java sources.
pub fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "gradle.properties", PROPERTIES.as_bytes());
    write(root, "jarship.toml", SETTINGS.as_bytes());
    write(root, "LICENSE", b"MIT License\n");
    write(root, "src/main/resources/demo.properties", b"greeting=hello\n");
    write(root, "build/classes/com/example/Demo.class", &[0xCA, 0xFE, 0xBA, 0xBE]);
    tmp
}
