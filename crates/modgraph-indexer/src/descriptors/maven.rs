//! Maven `pom.xml` parser built on quick-xml

use super::interpolate::Properties;
use crate::extractor::{DescriptorParser, ParseError};
use modgraph_core::{Module, ModuleId};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

pub const POM_XML: &str = "pom.xml";

/// Parses Maven POM files.
///
/// Only the project coordinates, the parent reference, `<properties>` and the
/// direct `<dependencies>` are read. Managed, plugin and profile dependencies
/// are ignored.
#[derive(Debug, Clone)]
pub struct MavenParser {
    descriptor_name: String,
}

impl MavenParser {
    pub fn new() -> Self {
        Self::with_descriptor_name(POM_XML)
    }

    /// Parser for POM files stored under a different file name.
    pub fn with_descriptor_name(name: impl Into<String>) -> Self {
        MavenParser {
            descriptor_name: name.into(),
        }
    }
}

impl Default for MavenParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorParser for MavenParser {
    fn descriptor_name(&self) -> &str {
        &self.descriptor_name
    }

    fn parse(&self, path: &Path, content: &[u8]) -> Result<Module, ParseError> {
        let mut reader = Reader::from_reader(content);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut pom = PomReader::default();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => pom.open(local_name(e))?,
                Event::Empty(ref e) => {
                    pom.open(local_name(e))?;
                    pom.close();
                }
                Event::Text(ref e) if pom.wants_text() => {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    pom.push_text(&text);
                }
                Event::CData(ref e) if pom.wants_text() => {
                    let text = reader.decoder().decode(e).map_err(quick_xml::Error::from)?;
                    pom.push_text(&text);
                }
                Event::End(_) => pom.close(),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        let module = pom.finish()?;
        tracing::trace!(
            "Parsed {} from {} ({} dependencies)",
            module.id,
            path.display(),
            module.dependencies.len()
        );
        Ok(module)
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// groupId/artifactId/version as written in the file.
#[derive(Debug, Clone, Default)]
struct Coordinates {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

impl Coordinates {
    fn set(&mut self, field: &str, value: Option<String>) {
        match field {
            "groupId" => self.group_id = value,
            "artifactId" => self.artifact_id = value,
            "version" => self.version = value,
            _ => {}
        }
    }
}

/// Streaming state while walking the POM element tree.
#[derive(Debug, Default)]
struct PomReader {
    path: Vec<String>,
    text: String,
    root_seen: bool,
    project: Coordinates,
    parent: Option<Coordinates>,
    properties: Vec<(String, String)>,
    dependencies: Vec<Coordinates>,
    current_dependency: Option<Coordinates>,
}

impl PomReader {
    fn open(&mut self, name: String) -> Result<(), ParseError> {
        if self.path.is_empty() && !self.root_seen {
            self.root_seen = true;
            if name != "project" {
                return Err(ParseError::NotAProject(name));
            }
        }
        self.path.push(name);
        self.text.clear();

        if self.at(&["project", "dependencies", "dependency"]) {
            self.current_dependency = Some(Coordinates::default());
        }
        Ok(())
    }

    /// Text is only decoded inside elements that feed the module record, so
    /// undecodable content elsewhere (developer names, descriptions) is skipped.
    fn wants_text(&self) -> bool {
        let segments: Vec<&str> = self.path.iter().map(String::as_str).collect();
        matches!(
            segments.as_slice(),
            ["project", "groupId" | "artifactId" | "version"]
                | ["project", "parent" | "properties", _]
                | ["project", "dependencies", "dependency", _]
        )
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn close(&mut self) {
        let text = std::mem::take(&mut self.text);
        let value = Some(text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let segments: Vec<&str> = self.path.iter().map(String::as_str).collect();
        match segments.as_slice() {
            ["project", field] => self.project.set(field, value),
            ["project", "parent", field] => self
                .parent
                .get_or_insert_with(Coordinates::default)
                .set(field, value),
            ["project", "properties", key] => {
                if let Some(value) = value {
                    self.properties.push((key.to_string(), value));
                }
            }
            ["project", "dependencies", "dependency"] => {
                if let Some(dependency) = self.current_dependency.take() {
                    self.dependencies.push(dependency);
                }
            }
            ["project", "dependencies", "dependency", field] => {
                if let Some(dependency) = self.current_dependency.as_mut() {
                    dependency.set(field, value);
                }
            }
            _ => {}
        }

        self.path.pop();
    }

    fn at(&self, expected: &[&str]) -> bool {
        self.path.len() == expected.len()
            && self.path.iter().zip(expected).all(|(a, b)| a == b)
    }

    /// Resolve the module identity (parent fallback, then placeholders) and
    /// its dependencies.
    fn finish(self) -> Result<Module, ParseError> {
        if let Some(open) = self.path.last() {
            return Err(ParseError::Unclosed(open.clone()));
        }
        if !self.root_seen {
            return Err(ParseError::Empty);
        }

        let parent = self.parent.unwrap_or_default();
        let artifact = self.project.artifact_id.ok_or(ParseError::MissingArtifactId)?;
        let group = self.project.group_id.or_else(|| parent.group_id.clone());
        let version = self.project.version.or_else(|| parent.version.clone());

        let mut props = Properties::new();
        for (key, value) in self.properties {
            props.insert(key, value);
        }
        props.insert_model_field("groupId", group.as_deref());
        props.insert_model_field("artifactId", Some(artifact.as_str()));
        props.insert_model_field("version", version.as_deref());
        props.insert_model_field("parent.groupId", parent.group_id.as_deref());
        props.insert_model_field("parent.artifactId", parent.artifact_id.as_deref());
        props.insert_model_field("parent.version", parent.version.as_deref());

        let id = ModuleId {
            group: group.map(|g| props.interpolate(&g)),
            artifact: props.interpolate(&artifact),
            version: version.map(|v| props.interpolate(&v)),
        };

        let dependencies = self
            .dependencies
            .into_iter()
            .filter_map(|dep| {
                let artifact = dep.artifact_id?;
                Some(ModuleId {
                    group: dep.group_id.map(|g| props.interpolate(&g)),
                    artifact: props.interpolate(&artifact),
                    version: dep.version.map(|v| props.interpolate(&v)),
                })
            })
            .collect();

        Ok(Module::new(id, dependencies))
    }
}
