//! POM rendering for a [`Publication`].

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use jarship_core::publication::Publication;
use jarship_util::errors::JarshipError;

const POM_NS: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_XSD: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Render the POM describing `publication`.
///
/// Optional metadata (project URL, license URL, SCM block) is emitted only
/// when configured.
pub fn render_pom(publication: &Publication) -> Result<String, JarshipError> {
    let mut w = PomWriter::new();
    w.decl()?;
    w.start_with_attrs(
        "project",
        &[
            ("xmlns", POM_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", POM_XSD),
        ],
    )?;
    w.text_element("modelVersion", "4.0.0")?;
    w.text_element("groupId", publication.group_id())?;
    w.text_element("artifactId", publication.artifact_id())?;
    w.text_element("version", publication.version())?;
    w.text_element("name", publication.name())?;
    w.text_element("description", publication.description())?;
    if let Some(url) = publication.url() {
        w.text_element("url", url)?;
    }

    let license = publication.license();
    w.start("licenses")?;
    w.start("license")?;
    w.text_element("name", &license.name)?;
    if let Some(url) = &license.url {
        w.text_element("url", url)?;
    }
    w.end("license")?;
    w.end("licenses")?;

    let org = publication.organization();
    w.start("organization")?;
    w.text_element("name", &org.name)?;
    w.text_element("url", &org.url)?;
    w.end("organization")?;

    let scm = publication.scm();
    if !scm.is_empty() {
        w.start("scm")?;
        if let Some(conn) = &scm.connection {
            w.text_element("connection", conn)?;
        }
        if let Some(dev) = &scm.developer_connection {
            w.text_element("developerConnection", dev)?;
        }
        if let Some(url) = &scm.url {
            w.text_element("url", url)?;
        }
        w.end("scm")?;
    }

    w.end("project")?;
    w.finish()
}

struct PomWriter {
    inner: Writer<Vec<u8>>,
}

impl PomWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), JarshipError> {
        self.inner
            .write_event(event)
            .map_err(|e| JarshipError::Generic {
                message: format!("Failed to write POM: {e}"),
            })
    }

    fn decl(&mut self) -> Result<(), JarshipError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    fn start(&mut self, name: &str) -> Result<(), JarshipError> {
        self.write(Event::Start(BytesStart::new(name)))
    }

    fn start_with_attrs(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), JarshipError> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.write(Event::Start(elem))
    }

    fn end(&mut self, name: &str) -> Result<(), JarshipError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), JarshipError> {
        self.start(name)?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String, JarshipError> {
        let mut xml = String::from_utf8(self.inner.into_inner()).map_err(|e| {
            JarshipError::InvariantViolation {
                message: format!("POM is not UTF-8: {e}"),
            }
        })?;
        xml.push('\n');
        Ok(xml)
    }
}
