//! Descriptor parser trait definition

use std::path::Path;
use modgraph_core::Module;
use thiserror::Error;

/// Reasons a descriptor is skipped.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document ends inside <{0}>")]
    Unclosed(String),

    #[error("root element is <{0}>, expected <project>")]
    NotAProject(String),

    #[error("empty document")]
    Empty,

    #[error("module has no artifactId")]
    MissingArtifactId,
}

/// Turns the content of one descriptor file into a [`Module`].
pub trait DescriptorParser {
    /// File name of the descriptors this parser understands, e.g. `pom.xml`.
    fn descriptor_name(&self) -> &str;

    fn parse(&self, path: &Path, content: &[u8]) -> Result<Module, ParseError>;

    /// Read and parse the descriptor at `path`. The file is closed before returning.
    fn parse_file(&self, path: &Path) -> Result<Module, ParseError> {
        let content = std::fs::read(path)?;
        self.parse(path, &content)
    }
}
