//! Modgraph Core — module data model, registry, graph builder and report writer

pub mod graph;
pub mod model;
pub mod registry;
pub mod report;



pub use graph::Graph;
pub use model::{GraphContent, GraphLink, GraphNode, Module, ModuleId};
pub use registry::Registry;
pub use report::{
    REPORT_DESCRIPTION, REPORT_ENTITY, REPORT_NAME, Report, VISUAL_TAGS, WriteError, write_report,
};
