//! Result envelope and JSON writer

use crate::graph::Graph;
use crate::model::GraphContent;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REPORT_NAME: &str = "CES - Maven Module Relations";
pub const REPORT_DESCRIPTION: &str = "Shows relations between maven modules";
pub const REPORT_ENTITY: &str = "MODULES";
pub const VISUAL_TAGS: [&str; 3] = ["digraph", "hierarchical-edge-bundle", "forced-layered-graph"];

/// Errors raised while writing the report.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output file could not be created or written, e.g. its directory
    /// is missing or the path names a directory.
    #[error("cannot create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("cannot serialize report for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Metadata envelope around the graph, as expected by the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: String,
    pub description: String,
    pub visual_tags: Vec<String>,
    pub entity: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub content: GraphContent,
}

impl Report {
    /// Wrap `graph`, stamping it with the current time.
    pub fn new(graph: &Graph) -> Self {
        Report::with_timestamp(graph.to_content(), chrono::Utc::now().timestamp_millis())
    }

    pub fn with_timestamp(content: GraphContent, timestamp: i64) -> Self {
        Report {
            name: REPORT_NAME.to_string(),
            description: REPORT_DESCRIPTION.to_string(),
            visual_tags: VISUAL_TAGS.iter().map(|t| t.to_string()).collect(),
            entity: REPORT_ENTITY.to_string(),
            timestamp,
            content,
        }
    }
}

/// Write `graph` to `path` as a pretty-printed one-element JSON array,
/// replacing any existing file.
pub fn write_report(graph: &Graph, path: &Path) -> Result<Report, WriteError> {
    let report = Report::new(graph);

    // The file is only touched once serialization has succeeded
    let bytes = serde_json::to_vec_pretty(&[&report]).map_err(|source| WriteError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, bytes).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Report written: {}", path.display());
    Ok(report)
}
