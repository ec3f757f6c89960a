//! CLI command implementations

use anyhow::Context;
use modgraph_core::{Graph, write_report};
use modgraph_indexer::{Coordinator, MavenParser};
use std::path::Path;

/// Settings for one generator run.
pub struct PipelineOptions {
    pub descriptor_name: String,
}

/// Scan `base` for descriptors and write the module graph to `output`.
pub fn generate(output: &Path, base: &Path, options: &PipelineOptions) -> anyhow::Result<()> {
    tracing::info!("Scanning {} for {} files", base.display(), options.descriptor_name);

    let coordinator = Coordinator::new(MavenParser::with_descriptor_name(&options.descriptor_name));
    let index = coordinator
        .run_full_index(base)
        .with_context(|| format!("failed to scan {}", base.display()))?;

    tracing::info!(
        "Parsed {} of {} descriptors into {} modules",
        index.discovered - index.skipped,
        index.discovered,
        index.registry.len()
    );
    if index.skipped > 0 {
        tracing::info!(
            "Skipped {} unparsable descriptors (use --verbose for details)",
            index.skipped
        );
    }
    if index.registry.replaced_count() > 0 {
        tracing::debug!(
            "{} descriptors redeclared an existing module",
            index.registry.replaced_count()
        );
    }
    if index.registry.is_empty() {
        tracing::warn!("No modules found under {}", base.display());
    }

    let graph = Graph::from_registry(&index.registry);
    tracing::info!("Built graph: {} nodes, {} links", graph.node_count(), graph.edge_count());

    write_report(&graph, output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!("Graph written to {}", output.display());
    Ok(())
}
