//! Orchestrates discovery, parsing and registration

use crate::discovery::{discover, TraversalError};
use crate::extractor::DescriptorParser;
use modgraph_core::Registry;
use std::path::Path;

/// Outcome of indexing one directory tree.
#[derive(Debug)]
pub struct IndexResult {
    pub registry: Registry,
    /// Descriptor files found under the root.
    pub discovered: usize,
    /// Descriptor files that could not be parsed.
    pub skipped: usize,
}

pub struct Coordinator<P> {
    parser: P,
}

impl<P: DescriptorParser> Coordinator<P> {
    pub fn new(parser: P) -> Self {
        Coordinator { parser }
    }

    /// Index every descriptor under `root`, in discovery order.
    ///
    /// Descriptors that fail to parse are left out of the registry. Only a
    /// root that cannot be walked is an error.
    pub fn run_full_index(&self, root: &Path) -> Result<IndexResult, TraversalError> {
        let files = discover(root, self.parser.descriptor_name())?;
        let mut registry = Registry::new();
        let mut skipped = 0;

        for file in &files {
            match self.parser.parse_file(file) {
                Ok(module) => {
                    registry.insert(module);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", file.display(), e);
                    skipped += 1;
                }
            }
        }

        Ok(IndexResult {
            registry,
            discovered: files.len(),
            skipped,
        })
    }
}
