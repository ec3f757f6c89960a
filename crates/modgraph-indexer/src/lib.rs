//! Descriptor discovery and parsing

pub mod coordinator;
pub mod descriptors;
pub mod discovery;
pub mod extractor;


pub use coordinator::{Coordinator, IndexResult};
pub use descriptors::{MavenParser, POM_XML};
pub use discovery::{discover, TraversalError};
pub use extractor::{DescriptorParser, ParseError};
